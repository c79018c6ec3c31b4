//! Summaries over many projects
//!
//! Every project is quoted on its own and the rounded results are summed.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CostingError;
use crate::project::Project;

/// Inclusive date filter; open ends match everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub title: String,
    pub date: NaiveDate,
    pub cogs: f64,
    pub sale_price: f64,
    pub profit: f64,
    pub margin_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSummary {
    pub count: usize,
    pub cogs: f64,
    pub revenue: f64,
    pub profit: f64,
    pub rows: Vec<ReportRow>,
}

/// Validate the projects a report over `range` would include
///
/// Projects outside the range are not checked.
pub fn validate_in_range(projects: &[Project], range: DateRange) -> Result<(), CostingError> {
    for project in projects.iter().filter(|p| range.contains(p.date)) {
        project.validate().map_err(|err| match err {
            CostingError::Validation { field, message } => CostingError::Validation {
                field: format!("{} (project '{}')", field, project.title),
                message,
            },
            other => other,
        })?;
    }
    Ok(())
}

pub fn summarize(projects: &[Project], catalog: &Catalog, range: DateRange) -> ReportSummary {
    let mut summary = ReportSummary::default();

    for project in projects.iter().filter(|p| range.contains(p.date)) {
        let quote = project.quote(catalog);

        summary.cogs += quote.breakdown.cogs;
        summary.revenue += quote.pricing.sale_price;
        summary.profit += quote.pricing.profit;
        summary.rows.push(ReportRow {
            title: project.title.clone(),
            date: project.date,
            cogs: quote.breakdown.cogs,
            sale_price: quote.pricing.sale_price,
            profit: quote.pricing.profit,
            margin_percent: quote.pricing.margin_percent,
        });
    }
    summary.count = summary.rows.len();

    debug!(
        count = summary.count,
        cogs = summary.cogs,
        revenue = summary.revenue,
        "Report summarized"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectDefaults;
    use crate::costing::SaleMode;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn manual_project(title: &str, date: NaiveDate, price: f64, fixed_service: u32) -> Project {
        let mut project = Project::new(title, date, &ProjectDefaults::default());
        project.sale_mode = SaleMode::Manual;
        project.manual_sale_price_uah = price;
        project.services = vec![crate::project::ProjectServiceSelection {
            service_id: fixed_service,
            selected: true,
            time_minutes: None,
        }];
        project
    }

    #[test]
    fn test_date_range_contains() {
        let range = DateRange::new(Some(ymd(2024, 5, 1)), Some(ymd(2024, 5, 31)));

        assert!(range.contains(ymd(2024, 5, 1)));
        assert!(range.contains(ymd(2024, 5, 31)));
        assert!(!range.contains(ymd(2024, 4, 30)));
        assert!(!range.contains(ymd(2024, 6, 1)));
        assert!(DateRange::default().contains(ymd(1999, 1, 1)));
    }

    #[test]
    fn test_summarize_filters_and_sums() {
        let catalog = Catalog::seeded();
        let projects = vec![
            // Primer: 40 fixed
            manual_project("A", ymd(2024, 5, 2), 100.0, 3),
            // Packaging: 15 fixed
            manual_project("B", ymd(2024, 5, 20), 50.0, 5),
            manual_project("C", ymd(2024, 6, 2), 500.0, 3),
        ];

        let summary = summarize(
            &projects,
            &catalog,
            DateRange::new(Some(ymd(2024, 5, 1)), Some(ymd(2024, 5, 31))),
        );

        assert_eq!(summary.count, 2);
        assert!((summary.cogs - 55.0).abs() < 1e-9);
        assert!((summary.revenue - 150.0).abs() < 1e-9);
        assert!((summary.profit - 95.0).abs() < 1e-9);
        assert_eq!(summary.rows[1].title, "B");
    }

    #[test]
    fn test_validate_in_range_skips_other_dates() {
        let mut april = manual_project("April", ymd(2024, 4, 10), 100.0, 3);
        april.waste_percent = 150.0;
        let projects = vec![april, manual_project("May", ymd(2024, 5, 2), 100.0, 3)];

        let may = DateRange::new(Some(ymd(2024, 5, 1)), Some(ymd(2024, 5, 31)));
        assert!(validate_in_range(&projects, may).is_ok());

        let err = validate_in_range(&projects, DateRange::default()).unwrap_err();
        assert!(err.to_string().contains("waste_percent (project 'April')"));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], &Catalog::seeded(), DateRange::default());
        assert_eq!(summary, ReportSummary::default());
    }
}
