//! Projects and assembly of their cost inputs
//!
//! A project references catalog records by id. Dangling references are
//! logged and priced as absent rather than rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::catalog::{Catalog, Material};
use crate::config::ProjectDefaults;
use crate::costing::{
    compute_costs, compute_pricing, CostBreakdown, CostInput, PricingInput, PricingResult,
    SaleMode,
};
use crate::error::CostingError;

pub const MISSING_SELECTION_WARNING: &str = "Select printer and material to get full cost";

/// A service picked for a project
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectServiceSelection {
    pub service_id: u32,
    #[serde(default = "default_selected")]
    pub selected: bool,
    /// Minutes spent, only meaningful for time-based services
    #[serde(default)]
    pub time_minutes: Option<f64>,
}

fn default_selected() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub date: NaiveDate,
    pub qty: u32,
    pub note: Option<String>,
    pub printer_id: Option<u32>,
    pub material_id: Option<u32>,
    pub print_time_hours: f64,
    pub material_grams: f64,
    pub waste_percent: f64,
    pub sale_mode: SaleMode,
    pub markup_percent: f64,
    pub manual_sale_price_uah: f64,
    pub include_printer_amort: bool,
    pub include_printer_service: bool,
    pub services: Vec<ProjectServiceSelection>,
}

/// Result of pricing one project
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub breakdown: CostBreakdown,
    pub pricing: PricingResult,
}

impl Project {
    /// Empty project carrying the configured defaults
    pub fn new(title: impl Into<String>, date: NaiveDate, defaults: &ProjectDefaults) -> Self {
        Self {
            title: title.into(),
            date,
            qty: defaults.qty,
            note: None,
            printer_id: None,
            material_id: None,
            print_time_hours: 0.0,
            material_grams: 0.0,
            waste_percent: defaults.waste_percent,
            sale_mode: defaults.sale_mode,
            markup_percent: defaults.markup_percent,
            manual_sale_price_uah: 0.0,
            include_printer_amort: false,
            include_printer_service: false,
            services: Vec::new(),
        }
    }

    /// Select a material and take over its default waste
    pub fn apply_material_defaults(&mut self, material: &Material) {
        self.material_id = Some(material.id);
        self.waste_percent = material.default_waste_percent;
    }

    pub fn missing_selection_warning(&self) -> Option<&'static str> {
        if self.printer_id.is_none() || self.material_id.is_none() {
            Some(MISSING_SELECTION_WARNING)
        } else {
            None
        }
    }

    /// Check the ranges the engine leaves to its callers
    pub fn validate(&self) -> Result<(), CostingError> {
        if self.title.trim().is_empty() {
            return Err(CostingError::validation("title", "must not be empty"));
        }
        if self.qty < 1 {
            return Err(CostingError::validation("qty", "must be at least 1"));
        }

        check_range("print_time_hours", self.print_time_hours, 0.0, f64::MAX)?;
        check_range("material_grams", self.material_grams, 0.0, f64::MAX)?;
        check_range("waste_percent", self.waste_percent, 0.0, 100.0)?;
        check_range("markup_percent", self.markup_percent, -100.0, 1000.0)?;
        check_range("manual_sale_price_uah", self.manual_sale_price_uah, 0.0, f64::MAX)?;

        for selection in self.services.iter().filter(|s| s.selected) {
            if let Some(minutes) = selection.time_minutes {
                check_range(
                    &format!("services[{}].time_minutes", selection.service_id),
                    minutes,
                    0.0,
                    f64::MAX,
                )?;
            }
        }

        Ok(())
    }

    /// Gather the engine input from this project and the catalog snapshot
    pub fn cost_input(&self, catalog: &Catalog) -> CostInput {
        let printer = self.printer_id.and_then(|id| {
            let printer = catalog.printer(id);
            if printer.is_none() {
                warn!(project = %self.title, printer_id = id, "Printer not found in catalog");
            }
            printer
        });
        let material = self.material_id.and_then(|id| {
            let material = catalog.material(id);
            if material.is_none() {
                warn!(project = %self.title, material_id = id, "Material not found in catalog");
            }
            material
        });

        let mut labor_minutes = 0.0;
        let mut fixed_services_uah = 0.0;
        for selection in self.services.iter().filter(|s| s.selected) {
            let Some(service) = catalog.service(selection.service_id) else {
                warn!(
                    project = %self.title,
                    service_id = selection.service_id,
                    "Service not found in catalog"
                );
                continue;
            };
            fixed_services_uah += service.fixed_uah;
            if service.uses_time {
                labor_minutes += selection.time_minutes.unwrap_or(0.0);
            }
        }

        let input = CostInput {
            print_time_hours: self.print_time_hours,
            printer_power_watts: printer.map(|p| p.power_watts),
            electricity_uah_per_kwh: catalog.settings.electricity_uah_per_kwh,
            material_grams: self.material_grams,
            material_price_uah_per_kg: material.map(|m| m.price_uah_per_kg),
            waste_percent: self.waste_percent,
            labor_minutes,
            labor_uah_per_hour: catalog.settings.labor_uah_per_hour,
            fixed_services_uah,
            printer_amort_uah_per_hour: printer.and_then(|p| p.amort_uah_per_hour),
            printer_service_uah_per_hour: printer.and_then(|p| p.service_uah_per_hour),
            include_printer_amort: self.include_printer_amort,
            include_printer_service: self.include_printer_service,
        };
        debug!(project = %self.title, ?input, "Assembled cost input");
        input
    }

    /// Cost the project, then price the resulting COGS
    pub fn quote(&self, catalog: &Catalog) -> Quote {
        let breakdown = compute_costs(&self.cost_input(catalog));
        let pricing = compute_pricing(&PricingInput {
            cogs: breakdown.cogs,
            sale_mode: self.sale_mode,
            markup_percent: self.markup_percent,
            manual_sale_price_uah: self.manual_sale_price_uah,
        });
        debug!(
            project = %self.title,
            cogs = breakdown.cogs,
            sale_price = pricing.sale_price,
            "Quoted project"
        );
        Quote { breakdown, pricing }
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), CostingError> {
    if !value.is_finite() {
        return Err(CostingError::validation(field, "must be a finite number"));
    }
    if value < min || value > max {
        let message = if max == f64::MAX {
            format!("must be at least {}, got {}", min, value)
        } else {
            format!("must be within {}..={}, got {}", min, max, value)
        };
        return Err(CostingError::validation(field, message));
    }
    Ok(())
}

/// Render print time as hours and minutes, e.g. `2h 30m`
pub fn format_print_time(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{}h {}m", total_minutes.div_euclid(60), total_minutes.rem_euclid(60))
}

/// Project as written in a projects file; omitted fields take defaults
#[derive(Debug, Deserialize)]
struct ProjectRecord {
    title: String,
    date: String,
    qty: Option<u32>,
    note: Option<String>,
    printer_id: Option<u32>,
    material_id: Option<u32>,
    #[serde(default)]
    print_time_hours: f64,
    #[serde(default)]
    material_grams: f64,
    waste_percent: Option<f64>,
    sale_mode: Option<SaleMode>,
    markup_percent: Option<f64>,
    #[serde(default)]
    manual_sale_price_uah: f64,
    #[serde(default)]
    include_printer_amort: bool,
    #[serde(default)]
    include_printer_service: bool,
    #[serde(default)]
    services: Vec<ProjectServiceSelection>,
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

impl ProjectRecord {
    fn into_project(
        self,
        catalog: &Catalog,
        defaults: &ProjectDefaults,
    ) -> Result<Project, CostingError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")?;
        let mut project = Project::new(self.title, date, defaults);

        if let Some(material) = self.material_id.and_then(|id| catalog.material(id)) {
            project.apply_material_defaults(material);
        }
        project.material_id = self.material_id;
        if let Some(waste) = self.waste_percent {
            project.waste_percent = waste;
        }
        if let Some(qty) = self.qty {
            project.qty = qty;
        }
        if let Some(mode) = self.sale_mode {
            project.sale_mode = mode;
        }
        if let Some(markup) = self.markup_percent {
            project.markup_percent = markup;
        }

        project.note = self.note;
        project.printer_id = self.printer_id;
        project.print_time_hours = self.print_time_hours;
        project.material_grams = self.material_grams;
        project.manual_sale_price_uah = self.manual_sale_price_uah;
        project.include_printer_amort = self.include_printer_amort;
        project.include_printer_service = self.include_printer_service;
        project.services = self.services;

        Ok(project)
    }
}

/// Parse a `[[projects]]` TOML document
pub fn parse_projects(
    content: &str,
    catalog: &Catalog,
    defaults: &ProjectDefaults,
) -> Result<Vec<Project>, CostingError> {
    let file: ProjectsFile = toml::from_str(content)?;
    file.projects
        .into_iter()
        .map(|record| record.into_project(catalog, defaults))
        .collect()
}

pub fn load_projects(
    path: &Path,
    catalog: &Catalog,
    defaults: &ProjectDefaults,
) -> Result<Vec<Project>, CostingError> {
    let content = std::fs::read_to_string(path)?;
    let projects = parse_projects(&content, catalog, defaults)?;
    debug!(path = %path.display(), count = projects.len(), "Loaded projects");
    Ok(projects)
}
