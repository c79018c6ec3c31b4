//! Command implementations for the CLI
//!
//! - quote: cost breakdown and price per project
//! - report: date-range summary
//! - catalog: list printers, materials and services
//! - config: configuration display and validation

pub mod catalog;
pub mod config;
pub mod quote;
pub mod report;

/// Format an amount in hryvnias
pub(crate) fn uah(value: f64) -> String {
    format!("{:.2} грн", value)
}
