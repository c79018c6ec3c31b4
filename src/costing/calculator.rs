use crate::costing::models::{CostBreakdown, CostInput};

/// Round to 2 decimals, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hourly printer overhead, counted only when enabled and the rate is nonzero
fn overhead_cost(include: bool, rate_per_hour: Option<f64>, hours: f64) -> f64 {
    match rate_per_hour {
        Some(rate) if include && rate != 0.0 => hours * rate,
        _ => 0.0,
    }
}

/// Compute the itemized cost of a print job
///
/// Each field is rounded on its own from the unrounded intermediate values,
/// including `cogs`.
pub fn compute_costs(input: &CostInput) -> CostBreakdown {
    // Power is in watts, tariff per kWh
    let electricity_kwh = match input.printer_power_watts {
        Some(watts) => (watts / 1000.0) * input.print_time_hours,
        None => 0.0,
    };
    let electricity_cost = electricity_kwh * input.electricity_uah_per_kwh;

    let material_cost = match input.material_price_uah_per_kg {
        Some(price) => {
            (input.material_grams / 1000.0) * price * (1.0 + input.waste_percent / 100.0)
        }
        None => 0.0,
    };

    let labor_cost = (input.labor_minutes / 60.0) * input.labor_uah_per_hour;
    let fixed_services_cost = input.fixed_services_uah;

    let printer_amort_cost = overhead_cost(
        input.include_printer_amort,
        input.printer_amort_uah_per_hour,
        input.print_time_hours,
    );
    let printer_service_cost = overhead_cost(
        input.include_printer_service,
        input.printer_service_uah_per_hour,
        input.print_time_hours,
    );

    let post_cost = labor_cost + fixed_services_cost;
    let cogs =
        electricity_cost + material_cost + post_cost + printer_amort_cost + printer_service_cost;

    CostBreakdown {
        electricity_kwh: round2(electricity_kwh),
        electricity_cost: round2(electricity_cost),
        material_cost: round2(material_cost),
        labor_cost: round2(labor_cost),
        fixed_services_cost: round2(fixed_services_cost),
        printer_amort_cost: round2(printer_amort_cost),
        printer_service_cost: round2(printer_service_cost),
        post_cost: round2(post_cost),
        cogs: round2(cogs),
    }
}
