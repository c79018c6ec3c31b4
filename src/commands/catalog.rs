use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use printcost::config::Config;

use super::uah;

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        header
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

fn optional_rate(rate: Option<f64>) -> String {
    rate.map_or("-".to_string(), |r| format!("{}/h", uah(r)))
}

/// Execute the catalog command
pub fn execute(cfg: &Config) {
    let catalog = &cfg.catalog;

    println!("{}", "Tariffs:".bold());
    println!(
        "  Electricity: {} грн/kWh",
        catalog.settings.electricity_uah_per_kwh
    );
    println!("  Labor:       {} грн/h", catalog.settings.labor_uah_per_hour);
    println!();

    let mut printers = new_table(&["ID", "PRINTER", "POWER", "AMORTIZATION", "SERVICE"]);
    for printer in &catalog.printers {
        printers.add_row(vec![
            Cell::new(printer.id),
            Cell::new(&printer.name),
            Cell::new(format!("{} W", printer.power_watts)),
            Cell::new(optional_rate(printer.amort_uah_per_hour)),
            Cell::new(optional_rate(printer.service_uah_per_hour)),
        ]);
    }
    println!("{}", "Printers:".bold());
    println!("{}\n", printers);

    let mut materials = new_table(&["ID", "MATERIAL", "PRICE", "DEFAULT WASTE"]);
    for material in &catalog.materials {
        materials.add_row(vec![
            Cell::new(material.id),
            Cell::new(&material.name),
            Cell::new(format!("{}/kg", uah(material.price_uah_per_kg))),
            Cell::new(format!("{}%", material.default_waste_percent)),
        ]);
    }
    println!("{}", "Materials:".bold());
    println!("{}\n", materials);

    let mut services = new_table(&["ID", "SERVICE", "FIXED", "BILLING"]);
    for service in &catalog.services {
        let billing = if service.uses_time {
            "fixed + time"
        } else {
            "fixed"
        };
        services.add_row(vec![
            Cell::new(service.id),
            Cell::new(&service.name),
            Cell::new(uah(service.fixed_uah)),
            Cell::new(billing),
        ]);
    }
    println!("{}", "Services:".bold());
    println!("{}", services);
}
