use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw measurements and tariffs for a single print job
///
/// Absent rates (`None`) disable the matching cost line instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostInput {
    pub print_time_hours: f64,
    pub printer_power_watts: Option<f64>,
    pub electricity_uah_per_kwh: f64,
    pub material_grams: f64,
    pub material_price_uah_per_kg: Option<f64>,
    /// Applied as `(1 + waste_percent / 100)`; not range checked here
    pub waste_percent: f64,
    /// Total minutes of selected time-based services
    pub labor_minutes: f64,
    pub labor_uah_per_hour: f64,
    /// Sum of fixed charges of selected services
    pub fixed_services_uah: f64,
    pub printer_amort_uah_per_hour: Option<f64>,
    pub printer_service_uah_per_hour: Option<f64>,
    pub include_printer_amort: bool,
    pub include_printer_service: bool,
}

/// Itemized cost of a print job, every field rounded to 2 decimals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub electricity_kwh: f64,
    pub electricity_cost: f64,
    pub material_cost: f64,
    pub labor_cost: f64,
    pub fixed_services_cost: f64,
    pub printer_amort_cost: f64,
    pub printer_service_cost: f64,
    /// Labor plus fixed services
    pub post_cost: f64,
    pub cogs: f64,
}

impl CostBreakdown {
    /// Create a zero-cost breakdown
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of the rounded components.
    ///
    /// `cogs` is rounded from the unrounded sum, so this can differ from it by a
    /// few hundredths.
    pub fn component_sum(&self) -> f64 {
        self.electricity_cost
            + self.material_cost
            + self.labor_cost
            + self.fixed_services_cost
            + self.printer_amort_cost
            + self.printer_service_cost
    }
}

/// How the sale price of a project is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleMode {
    /// COGS plus a percentage
    #[default]
    Markup,
    /// Operator-entered price
    Manual,
}

impl fmt::Display for SaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup => write!(f, "markup"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

impl FromStr for SaleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markup" => Ok(Self::Markup),
            "manual" => Ok(Self::Manual),
            other => Err(format!("unknown sale mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub cogs: f64,
    pub sale_mode: SaleMode,
    /// May be negative; -100 prices the job at zero
    pub markup_percent: f64,
    pub manual_sale_price_uah: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub sale_price: f64,
    pub profit: f64,
    pub margin_percent: f64,
}
