//! Read-only snapshots of the records a quote is priced against
//!
//! The catalog is owned by whatever stores printers, materials and services;
//! this crate only reads it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CostingError;

/// Global tariffs
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalSettings {
    pub electricity_uah_per_kwh: f64,
    pub labor_uah_per_hour: f64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            electricity_uah_per_kwh: 4.32,
            labor_uah_per_hour: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Printer {
    pub id: u32,
    pub name: String,
    pub power_watts: f64,
    #[serde(default)]
    pub amort_uah_per_hour: Option<f64>,
    #[serde(default)]
    pub service_uah_per_hour: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Material {
    pub id: u32,
    pub name: String,
    pub price_uah_per_kg: f64,
    #[serde(default)]
    pub default_waste_percent: f64,
}

/// Post-processing service
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub fixed_uah: f64,
    /// Also consumes labor time, billed at the labor tariff
    #[serde(default)]
    pub uses_time: bool,
}

/// Omitted sections fall back to the seeded data; an explicit empty list
/// stays empty.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Catalog {
    pub settings: GlobalSettings,
    pub printers: Vec<Printer>,
    pub materials: Vec<Material>,
    pub services: Vec<Service>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// Built-in starter data
    pub fn seeded() -> Self {
        let printers = [
            ("Prusa MK3S+", 120.0, 15.0, 5.0),
            ("Bambu Lab P1S", 80.0, 20.0, 8.0),
        ]
        .into_iter()
        .zip(1..)
        .map(|((name, power_watts, amort, service), id)| Printer {
            id,
            name: name.to_string(),
            power_watts,
            amort_uah_per_hour: Some(amort),
            service_uah_per_hour: Some(service),
        })
        .collect();

        let materials = [
            ("PLA", 450.0, 5.0),
            ("PETG", 650.0, 7.0),
            ("ABS", 700.0, 10.0),
            ("TPU", 900.0, 8.0),
        ]
        .into_iter()
        .zip(1..)
        .map(|((name, price_uah_per_kg, default_waste_percent), id)| Material {
            id,
            name: name.to_string(),
            price_uah_per_kg,
            default_waste_percent,
        })
        .collect();

        let services = [
            ("Support removal", 20.0, true),
            ("Sanding", 30.0, true),
            ("Primer", 40.0, false),
            ("Painting", 60.0, true),
            ("Packaging", 15.0, false),
        ]
        .into_iter()
        .zip(1..)
        .map(|((name, fixed_uah, uses_time), id)| Service {
            id,
            name: name.to_string(),
            fixed_uah,
            uses_time,
        })
        .collect();

        Self {
            settings: GlobalSettings::default(),
            printers,
            materials,
            services,
        }
    }

    pub fn printer(&self, id: u32) -> Option<&Printer> {
        self.printers.iter().find(|p| p.id == id)
    }

    pub fn material(&self, id: u32) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn service(&self, id: u32) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Check ids are unique and tariffs and rates are nonnegative
    pub fn validate(&self) -> Result<(), CostingError> {
        non_negative("settings.electricity_uah_per_kwh", self.settings.electricity_uah_per_kwh)?;
        non_negative("settings.labor_uah_per_hour", self.settings.labor_uah_per_hour)?;

        unique_ids("printers", self.printers.iter().map(|p| p.id))?;
        unique_ids("materials", self.materials.iter().map(|m| m.id))?;
        unique_ids("services", self.services.iter().map(|s| s.id))?;

        for printer in &self.printers {
            non_negative(&format!("printer '{}' power_watts", printer.name), printer.power_watts)?;
            if let Some(rate) = printer.amort_uah_per_hour {
                non_negative(&format!("printer '{}' amort_uah_per_hour", printer.name), rate)?;
            }
            if let Some(rate) = printer.service_uah_per_hour {
                non_negative(&format!("printer '{}' service_uah_per_hour", printer.name), rate)?;
            }
        }

        for material in &self.materials {
            non_negative(
                &format!("material '{}' price_uah_per_kg", material.name),
                material.price_uah_per_kg,
            )?;
            if !(0.0..=100.0).contains(&material.default_waste_percent) {
                return Err(CostingError::Config(format!(
                    "material '{}' default_waste_percent must be within 0..=100, got {}",
                    material.name, material.default_waste_percent
                )));
            }
        }

        for service in &self.services {
            non_negative(&format!("service '{}' fixed_uah", service.name), service.fixed_uah)?;
        }

        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), CostingError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CostingError::Config(format!(
            "{} must be a nonnegative number, got {}",
            name, value
        )));
    }
    Ok(())
}

fn unique_ids(kind: &str, ids: impl Iterator<Item = u32>) -> Result<(), CostingError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CostingError::Config(format!("duplicate {} id: {}", kind, id)));
        }
    }
    Ok(())
}
