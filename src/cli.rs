use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "printcost", version, about = "Cost and price 3D print jobs")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "printcost.toml", global = true)]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(long, global = true, env = "PRINTCOST_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the cost breakdown and price of projects
    Quote {
        /// TOML file with a [[projects]] array
        projects: PathBuf,

        /// Only quote the project with this title
        #[arg(short, long)]
        title: Option<String>,

        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Summarize COGS, revenue and profit over a date range
    Report {
        /// TOML file with a [[projects]] array
        projects: PathBuf,

        /// First day included (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day included (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List printers, materials, services and tariffs
    Catalog,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}
