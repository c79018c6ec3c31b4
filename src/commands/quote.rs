use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use printcost::config::Config;
use printcost::project::{self, format_print_time, Project, Quote};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use super::uah;

#[derive(Debug, Serialize)]
struct QuoteOutput<'a> {
    project: &'a Project,
    warning: Option<&'static str>,
    #[serde(flatten)]
    quote: Quote,
}

/// Execute the quote command
///
/// Validates every selected project before printing anything
pub fn execute(cfg: &Config, path: &Path, title: Option<&str>, json: bool) -> Result<()> {
    let projects = project::load_projects(path, &cfg.catalog, &cfg.defaults)
        .with_context(|| format!("failed to load projects from {}", path.display()))?;

    let selected: Vec<&Project> = projects
        .iter()
        .filter(|p| title.map_or(true, |t| p.title == t))
        .collect();
    if selected.is_empty() {
        anyhow::bail!("No matching projects in {}", path.display());
    }

    for project in &selected {
        project
            .validate()
            .with_context(|| format!("project '{}'", project.title))?;
    }

    let outputs: Vec<QuoteOutput> = selected
        .into_iter()
        .map(|project| QuoteOutput {
            project,
            warning: project.missing_selection_warning(),
            quote: project.quote(&cfg.catalog),
        })
        .collect();
    info!(count = outputs.len(), "Projects quoted");

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for output in &outputs {
        print_quote(output);
    }
    Ok(())
}

fn print_quote(output: &QuoteOutput) {
    let project = output.project;
    let breakdown = &output.quote.breakdown;
    let pricing = &output.quote.pricing;

    println!(
        "{} ({}, qty {}, print time {})",
        project.title.bold(),
        project.date,
        project.qty,
        format_print_time(project.print_time_hours)
    );
    if let Some(warning) = output.warning {
        println!("  {}", warning.yellow());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ITEM").fg(Color::Cyan),
        Cell::new("VALUE").fg(Color::Cyan),
    ]);

    table.add_row(vec![
        Cell::new("Electricity"),
        Cell::new(format!(
            "{} ({:.2} kWh)",
            uah(breakdown.electricity_cost),
            breakdown.electricity_kwh
        )),
    ]);
    table.add_row(vec![Cell::new("Material"), Cell::new(uah(breakdown.material_cost))]);
    table.add_row(vec![Cell::new("Labor"), Cell::new(uah(breakdown.labor_cost))]);
    table.add_row(vec![
        Cell::new("Fixed services"),
        Cell::new(uah(breakdown.fixed_services_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Post-processing total"),
        Cell::new(uah(breakdown.post_cost)),
    ]);
    if project.include_printer_amort {
        table.add_row(vec![
            Cell::new("Printer amortization"),
            Cell::new(uah(breakdown.printer_amort_cost)),
        ]);
    }
    if project.include_printer_service {
        table.add_row(vec![
            Cell::new("Printer service"),
            Cell::new(uah(breakdown.printer_service_cost)),
        ]);
    }
    table.add_row(vec![
        Cell::new("COGS").fg(Color::Yellow),
        Cell::new(uah(breakdown.cogs)).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new(format!("Sale price ({})", project.sale_mode)),
        Cell::new(uah(pricing.sale_price)),
    ]);

    let profit_color = if pricing.profit < 0.0 {
        Color::Red
    } else {
        Color::Green
    };
    table.add_row(vec![
        Cell::new("Profit"),
        Cell::new(uah(pricing.profit)).fg(profit_color),
    ]);
    table.add_row(vec![
        Cell::new("Margin"),
        Cell::new(format!("{:.2}%", pricing.margin_percent)).fg(profit_color),
    ]);

    println!("{}\n", table);
}
