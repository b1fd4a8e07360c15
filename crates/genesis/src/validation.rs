//! Plausibility checks over a finished world
//!
//! Generation never fails; instead a world whose constants stray outside
//! life-friendly ranges carries warnings describing how far they strayed.

use serde::{Deserialize, Serialize};
use units::Pressure;

use crate::profile::WorldConstants;

/// Earth gravity used for the g-ratio (m/s²)
const EARTH_GRAVITY: f64 = 9.81;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Extreme,
}

/// One out-of-range constant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationWarning {
    pub parameter: &'static str,
    /// Value in the units of `expected_range`
    pub value: f64,
    pub expected_range: (f64, f64),
    pub severity: Severity,
    pub message: String,
}

/// Check gravity, metallicity, ocean fraction, pH, pressure and orbit
pub fn validate(world: &WorldConstants) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let g = world.planetary.gravity / EARTH_GRAVITY;
    if !(0.1..=3.0).contains(&g) {
        warnings.push(ValidationWarning {
            parameter: "gravity",
            value: g,
            expected_range: (0.1, 3.0),
            severity: if !(0.05..=5.0).contains(&g) {
                Severity::Extreme
            } else {
                Severity::Warning
            },
            message: format!("Gravity is {g:.2}g. Habitable range is typically 0.1g - 3.0g."),
        });
    }

    let z = world.cosmic.metallicity;
    if !(1e-4..=0.03).contains(&z) {
        warnings.push(ValidationWarning {
            parameter: "metallicity",
            value: z,
            expected_range: (1e-4, 0.03),
            severity: if !(1e-5..=0.05).contains(&z) {
                Severity::Extreme
            } else {
                Severity::Info
            },
            message: format!(
                "Metallicity is {z:.2e}. Pop III stars: ~0.0001, galactic center: ~0.03."
            ),
        });
    }

    let ocean = world.planetary.ocean_mass_fraction;
    if !(0.0..=0.9).contains(&ocean) {
        warnings.push(ValidationWarning {
            parameter: "ocean_mass_fraction",
            value: ocean,
            expected_range: (0.0, 0.9),
            severity: Severity::Warning,
            message: format!("Ocean mass fraction is {:.2}%. Earth: ~0.03%.", ocean * 100.0),
        });
    }

    let ph = world.chemistry.ph_value;
    if !(5.0..=9.0).contains(&ph) {
        warnings.push(ValidationWarning {
            parameter: "ph_value",
            value: ph,
            expected_range: (5.0, 9.0),
            severity: if !(3.0..=11.0).contains(&ph) {
                Severity::Extreme
            } else {
                Severity::Warning
            },
            message: format!("pH is {ph:.2}. Life-compatible range: 5.0 - 9.0."),
        });
    }

    let atm = world.atmospheric.atmospheric_pressure.to_atmospheres();
    if !(0.1..=10.0).contains(&atm) {
        warnings.push(pressure_warning(world.atmospheric.atmospheric_pressure));
    }

    let orbit = world.planetary.orbital_radius;
    if !world.derived.in_habitable_zone(orbit) {
        let inner = world.derived.habitable_zone_inner.to_au();
        let outer = world.derived.habitable_zone_outer.to_au();
        warnings.push(ValidationWarning {
            parameter: "orbital_radius",
            value: orbit.to_au(),
            expected_range: (inner, outer),
            severity: Severity::Info,
            message: format!(
                "Planet at {:.2} AU. Habitable zone: {inner:.2} - {outer:.2} AU.",
                orbit.to_au()
            ),
        });
    }

    warnings
}

fn pressure_warning(pressure: Pressure) -> ValidationWarning {
    let atm = pressure.to_atmospheres();
    ValidationWarning {
        parameter: "atmospheric_pressure",
        value: atm,
        expected_range: (0.1, 10.0),
        severity: if !(0.01..=100.0).contains(&atm) {
            Severity::Extreme
        } else {
            Severity::Warning
        },
        message: format!("Atmospheric pressure is {atm:.2} atm. Habitable range: 0.1 - 10.0 atm."),
    }
}
