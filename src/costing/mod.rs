pub mod calculator;
pub mod models;
pub mod pricing;

pub use calculator::{compute_costs, round2};
pub use models::{CostBreakdown, CostInput, PricingInput, PricingResult, SaleMode};
pub use pricing::compute_pricing;
