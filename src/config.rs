use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::Catalog;
use crate::costing::SaleMode;
use crate::error::CostingError;

pub const ENV_PREFIX: &str = "PRINTCOST";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: ProjectDefaults,
    #[serde(default)]
    pub catalog: Catalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            defaults: ProjectDefaults::default(),
            catalog: Catalog::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Values a new project starts with
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectDefaults {
    #[serde(default)]
    pub sale_mode: SaleMode,
    #[serde(default = "default_markup_percent")]
    pub markup_percent: f64,
    #[serde(default)]
    pub waste_percent: f64,
    #[serde(default = "default_qty")]
    pub qty: u32,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            sale_mode: SaleMode::Markup,
            markup_percent: default_markup_percent(),
            waste_percent: 0.0,
            qty: default_qty(),
        }
    }
}

fn default_markup_percent() -> f64 {
    30.0
}

fn default_qty() -> u32 {
    1
}

/// Load configuration from `path` (if present) overlaid with `PRINTCOST__*`
/// environment variables
pub fn load_config(path: &Path) -> Result<Config, CostingError> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<(), CostingError> {
    match cfg.logging.format.as_str() {
        "pretty" | "json" => {}
        other => {
            return Err(CostingError::Config(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                other
            )))
        }
    }

    let defaults = &cfg.defaults;
    if !(-100.0..=1000.0).contains(&defaults.markup_percent) {
        return Err(CostingError::Config(format!(
            "defaults.markup_percent must be within -100..=1000, got {}",
            defaults.markup_percent
        )));
    }
    if !(0.0..=100.0).contains(&defaults.waste_percent) {
        return Err(CostingError::Config(format!(
            "defaults.waste_percent must be within 0..=100, got {}",
            defaults.waste_percent
        )));
    }
    if defaults.qty < 1 {
        return Err(CostingError::Config("defaults.qty must be at least 1".to_string()));
    }

    cfg.catalog.validate()
}
