/// Integration tests for the costing and pricing engine
use printcost::costing::{
    compute_costs, compute_pricing, CostInput, PricingInput, SaleMode,
};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

fn bracket_job() -> CostInput {
    CostInput {
        print_time_hours: 5.0,
        printer_power_watts: Some(120.0),
        electricity_uah_per_kwh: 4.32,
        material_grams: 50.0,
        material_price_uah_per_kg: Some(450.0),
        waste_percent: 5.0,
        labor_minutes: 30.0,
        labor_uah_per_hour: 200.0,
        fixed_services_uah: 20.0,
        printer_amort_uah_per_hour: None,
        printer_service_uah_per_hour: None,
        include_printer_amort: false,
        include_printer_service: false,
    }
}

fn varied_jobs() -> Vec<CostInput> {
    let mut jobs = Vec::new();
    for (hours, watts, grams, minutes) in [
        (0.0, 80.0, 0.0, 0.0),
        (1.25, 120.0, 13.7, 12.0),
        (7.333, 80.0, 212.4, 45.0),
        (48.0, 350.0, 1450.0, 240.0),
        (0.01, 65.5, 0.3, 1.0),
    ] {
        jobs.push(CostInput {
            print_time_hours: hours,
            printer_power_watts: Some(watts),
            electricity_uah_per_kwh: 4.32,
            material_grams: grams,
            material_price_uah_per_kg: Some(650.0),
            waste_percent: 7.0,
            labor_minutes: minutes,
            labor_uah_per_hour: 200.0,
            fixed_services_uah: 55.0,
            printer_amort_uah_per_hour: Some(20.0),
            printer_service_uah_per_hour: Some(8.0),
            include_printer_amort: true,
            include_printer_service: true,
        });
    }
    jobs
}

#[test]
fn test_bracket_job_breakdown() {
    let breakdown = compute_costs(&bracket_job());

    assert_close(breakdown.electricity_kwh, 0.6, 1e-9);
    assert_close(breakdown.electricity_cost, 2.59, 1e-9);
    assert_close(breakdown.material_cost, 23.63, 1e-9);
    assert_close(breakdown.labor_cost, 100.0, 1e-9);
    assert_close(breakdown.fixed_services_cost, 20.0, 1e-9);
    assert_close(breakdown.post_cost, 120.0, 1e-9);
    assert_close(breakdown.cogs, 146.22, 1e-9);
}

#[test]
fn test_bracket_job_markup_pricing() {
    let breakdown = compute_costs(&bracket_job());
    let pricing = compute_pricing(&PricingInput {
        cogs: breakdown.cogs,
        sale_mode: SaleMode::Markup,
        markup_percent: 30.0,
        manual_sale_price_uah: 0.0,
    });

    assert_close(pricing.sale_price, 190.09, 1e-9);
    assert_close(pricing.profit, 43.87, 1e-9);
    assert_close(pricing.margin_percent, 23.08, 1e-9);
}

#[test]
fn test_bracket_job_manual_pricing() {
    let pricing = compute_pricing(&PricingInput {
        cogs: 146.22,
        sale_mode: SaleMode::Manual,
        markup_percent: 30.0,
        manual_sale_price_uah: 150.0,
    });

    assert_close(pricing.sale_price, 150.0, 1e-9);
    assert_close(pricing.profit, 3.78, 1e-9);
    assert_close(pricing.margin_percent, 2.52, 1e-9);
}

#[test]
fn test_cogs_matches_component_sum() {
    for job in varied_jobs() {
        let breakdown = compute_costs(&job);
        // One cent of rounding per component
        assert_close(breakdown.cogs, breakdown.component_sum(), 0.06);
    }
}

#[test]
fn test_no_printer_means_no_electricity() {
    for mut job in varied_jobs() {
        job.printer_power_watts = None;
        let breakdown = compute_costs(&job);

        assert_eq!(breakdown.electricity_kwh, 0.0);
        assert_eq!(breakdown.electricity_cost, 0.0);
    }
}

#[test]
fn test_no_material_price_means_no_material_cost() {
    for mut job in varied_jobs() {
        job.material_price_uah_per_kg = None;
        assert_eq!(compute_costs(&job).material_cost, 0.0);
    }
}

#[test]
fn test_amortization_toggle_adds_hourly_cost() {
    for mut job in varied_jobs().into_iter().filter(|j| j.print_time_hours > 0.0) {
        job.include_printer_amort = false;
        let without = compute_costs(&job);
        job.include_printer_amort = true;
        let with = compute_costs(&job);

        let expected = job.print_time_hours * job.printer_amort_uah_per_hour.unwrap();
        assert!(with.cogs > without.cogs);
        assert_close(with.cogs - without.cogs, expected, 0.011);
        assert_eq!(without.printer_amort_cost, 0.0);
    }
}

#[test]
fn test_manual_price_ignores_cogs() {
    for cogs in [0.0, 12.5, 146.22, 9999.99] {
        let pricing = compute_pricing(&PricingInput {
            cogs,
            sale_mode: SaleMode::Manual,
            markup_percent: 250.0,
            manual_sale_price_uah: 321.45,
        });
        assert_eq!(pricing.sale_price, 321.45);
    }
}

#[test]
fn test_zero_sale_price_margin_is_zero() {
    let manual = compute_pricing(&PricingInput {
        cogs: 42.0,
        sale_mode: SaleMode::Manual,
        markup_percent: 0.0,
        manual_sale_price_uah: 0.0,
    });
    assert_eq!(manual.margin_percent, 0.0);
    assert_close(manual.profit, -42.0, 1e-9);

    let full_discount = compute_pricing(&PricingInput {
        cogs: 42.0,
        sale_mode: SaleMode::Markup,
        markup_percent: -100.0,
        manual_sale_price_uah: 0.0,
    });
    assert_eq!(full_discount.sale_price, 0.0);
    assert_eq!(full_discount.margin_percent, 0.0);
    assert!(full_discount.margin_percent.is_finite());
}
