use thiserror::Error;

/// Errors raised around the costing engine
///
/// The engine itself is total; these cover loading and validating its inputs.
#[derive(Debug, Error)]
pub enum CostingError {
    /// Configuration or catalog error
    #[error("Configuration error: {0}")]
    Config(String),
    /// A project field is out of range
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl CostingError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for CostingError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::de::Error> for CostingError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(format!("TOML error: {}", err))
    }
}

impl From<chrono::ParseError> for CostingError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Parse(format!("date error: {}", err))
    }
}
