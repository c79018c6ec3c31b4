use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;

use printcost::{config, init_tracing};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    if let cli::Commands::Version = args.command {
        println!("printcost v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cfg = config::load_config(&args.config)?;
    let level = args.log_level.as_deref().unwrap_or(&cfg.logging.level);
    init_tracing(level, cfg.logging.format == "json");
    debug!(
        path = %args.config.display(),
        printers = cfg.catalog.printers.len(),
        materials = cfg.catalog.materials.len(),
        services = cfg.catalog.services.len(),
        "Configuration loaded"
    );

    match args.command {
        cli::Commands::Quote {
            projects,
            title,
            json,
        } => commands::quote::execute(&cfg, &projects, title.as_deref(), json)?,
        cli::Commands::Report {
            projects,
            start,
            end,
            json,
        } => commands::report::execute(&cfg, &projects, start, end, json)?,
        cli::Commands::Catalog => commands::catalog::execute(&cfg),
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg, &args.config),
        },
        cli::Commands::Version => {}
    }

    Ok(())
}
