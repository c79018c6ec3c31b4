use anyhow::Result;
use colored::Colorize;
use printcost::config::Config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration (file, environment and defaults merged)
pub fn show(cfg: &Config) -> Result<()> {
    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this prints a summary
pub fn validate(cfg: &Config, path: &Path) {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };

    println!("{} ({})", "✓ Configuration is valid".green(), source.dimmed());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Printers:  {}", cfg.catalog.printers.len());
    println!("  Materials: {}", cfg.catalog.materials.len());
    println!("  Services:  {}", cfg.catalog.services.len());
    println!(
        "  Defaults:  {} {}%, waste {}%",
        cfg.defaults.sale_mode, cfg.defaults.markup_percent, cfg.defaults.waste_percent
    );

    info!("Configuration validation successful");
}
