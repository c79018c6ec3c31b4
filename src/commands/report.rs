use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use printcost::config::Config;
use printcost::project;
use printcost::report::{self, DateRange};
use std::path::Path;
use tracing::info;

use super::uah;

/// Execute the report command
pub fn execute(
    cfg: &Config,
    path: &Path,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            anyhow::bail!("--start {} is after --end {}", start, end);
        }
    }

    let projects = project::load_projects(path, &cfg.catalog, &cfg.defaults)
        .with_context(|| format!("failed to load projects from {}", path.display()))?;
    let range = DateRange::new(start, end);
    report::validate_in_range(&projects, range)?;

    let summary = report::summarize(&projects, &cfg.catalog, range);
    info!(count = summary.count, "Report generated");

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let range_label = format!(
        "{} .. {}",
        start.map_or("*".to_string(), |d| d.to_string()),
        end.map_or("*".to_string(), |d| d.to_string())
    );
    println!("{} {}", "Report".bold(), range_label.dimmed());
    println!();

    if summary.rows.is_empty() {
        println!("{}", "No projects in range".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("DATE").fg(Color::Cyan),
        Cell::new("PROJECT").fg(Color::Cyan),
        Cell::new("COGS").fg(Color::Cyan),
        Cell::new("SALE PRICE").fg(Color::Cyan),
        Cell::new("PROFIT").fg(Color::Cyan),
        Cell::new("MARGIN").fg(Color::Cyan),
    ]);

    for row in &summary.rows {
        table.add_row(vec![
            Cell::new(row.date),
            Cell::new(&row.title),
            Cell::new(uah(row.cogs)),
            Cell::new(uah(row.sale_price)),
            Cell::new(uah(row.profit)),
            Cell::new(format!("{:.2}%", row.margin_percent)),
        ]);
    }
    println!("{}", table);
    println!();

    // Whole hryvnias, like the totals cards
    println!("{}", "Summary:".bold());
    println!("  Projects:  {}", summary.count);
    println!("  COGS:      {:.0} грн", summary.cogs);
    println!("  Revenue:   {:.0} грн", summary.revenue);
    println!("  Profit:    {:.0} грн", summary.profit);

    Ok(())
}
