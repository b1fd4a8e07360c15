//! Cosmic provenance timeline
//!
//! Walks the fifteen stages of cosmic history in order, drawing a seed factor
//! for every parameter that influences a stage and turning those factors into
//! raw physical constants. The result is the [`OverrideTable`] every domain
//! module consults before falling back to its own formulas.
//!
//! ```
//! use genesis::timeline::{self, OverrideTable};
//! use genesis::TimelineConfig;
//! use sampling::SeededStream;
//!
//! let mut stream = SeededStream::from_key("genesis_cosmic-timeline");
//! let table: OverrideTable = timeline::generate(&mut stream, &TimelineConfig::default());
//!
//! let hubble = table.get("hubble_expansion_rate").unwrap();
//! assert!(hubble > 0.0);
//! ```

mod stages;

#[cfg(test)]
mod timeline_test;

use std::collections::BTreeMap;

use sampling::RandomSource;
use serde::Serialize;
use tracing::debug;
use units::constants::{AU, BOLTZMANN, EARTH_MASS, LIGHT_YEAR, SOLAR_MASS, YEAR};

use crate::config::TimelineConfig;

pub use stages::{ConstantDef, STAGES, Stage};

/// Named raw constants produced by the timeline
///
/// Keys are snake_case constant names such as `"hubble_expansion_rate"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OverrideTable(BTreeMap<String, f64>);

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Run every stage in time order and collect the constants they generate
///
/// Each seed-influence parameter draws `N(1, sigma)` clamped to
/// `[floor, ceiling]`. A constant's factor is the mean of its parameters'
/// factors; a parameter the stage did not draw counts as 1.0.
pub fn generate<S: RandomSource>(stream: &mut S, config: &TimelineConfig) -> OverrideTable {
    let mut table = OverrideTable::new();

    for stage in STAGES.iter() {
        let factors: BTreeMap<&str, f64> = stage
            .seed_influence
            .iter()
            .map(|&param| {
                let draw = stream.gaussian(1.0, config.seed_factor_sigma);
                (
                    param,
                    draw.clamp(config.seed_factor_floor, config.seed_factor_ceiling),
                )
            })
            .collect();

        for constant in stage.constants {
            let factor = mean_factor(constant.seed_parameters, &factors);
            if let Some(value) = evaluate(constant.name, factor) {
                table.insert(constant.name, value);
            }
        }
    }

    debug!(
        stages = STAGES.len(),
        overrides = table.len(),
        "Cosmic timeline generated"
    );
    table
}

fn mean_factor(params: &[&str], factors: &BTreeMap<&str, f64>) -> f64 {
    if params.is_empty() {
        return 1.0;
    }
    let sum: f64 = params
        .iter()
        .map(|p| factors.get(p).copied().unwrap_or(1.0))
        .sum();
    sum / params.len() as f64
}

/// Evaluate a stage constant's formula at seed factor `f`
///
/// Returns `None` for names no stage generates.
pub fn evaluate(name: &str, f: f64) -> Option<f64> {
    let value = match name {
        // Planck epoch
        "time_dilation_constant" => 1.0 + (f - 1.0) * 0.01,
        "entropy_baseline" => BOLTZMANN * 1e120_f64.ln() * f,
        "vacuum_energy" => 1.956e9 * f,

        // Inflation
        "hubble_expansion_rate" => 67.4 * f,
        "cosmic_curvature" => (f - 1.0) * 0.01,
        "density_fluctuation_amplitude" => 2e-5 * f,

        // Quark-gluon plasma
        "baryon_to_photon_ratio" => 6.1e-10 * f,
        "matter_antimatter_ratio" => 1e-9 * (f - 1.0),
        "qcd_coupling_constant" => 0.118 * f,

        // Nucleosynthesis
        "hydrogen_fraction" => 0.75 * (1.0 + (f - 1.0) * 0.01),
        "helium_fraction" => 0.25 * (1.0 + (f - 1.0) * 0.01),
        "lithium_fraction" => 1e-10 * f,
        "deuterium_fraction" => 2.5e-5 * f,

        // Recombination
        "cmb_temperature" => 2.725 * (1.0 + (f - 1.0) * 0.001),
        "sound_horizon" => 147.0 * f,
        "photon_mean_free_path" => 1e26 * f,

        // Dark matter web
        "dark_matter_density" => 0.268 * (1.0 + (f - 1.0) * 0.01),
        "structure_formation_scale" => 1e21 * f,
        "cosmic_web_connectivity" => 3.5 * f,

        // Population III
        "pop3_imf_slope" => -2.35 + (f - 1.0) * 0.2,
        "star_formation_efficiency" => 0.01 * f,
        "min_stellar_mass" => 100.0 * SOLAR_MASS * f,

        // First supernovae
        "supernova_energy" => 1e44 * f,
        "iron_peak_yield" => 0.1 * SOLAR_MASS * f,
        "alpha_element_ratio" => f.log10(),

        // Galaxy position
        "distance_from_core" => 8000.0 * LIGHT_YEAR * f,
        "metallicity" => 0.02 * f,
        "orbital_velocity" => 220_000.0 * f,

        // Molecular cloud
        "molecular_cloud_mass" => 1e5 * SOLAR_MASS * f,
        "dust_fraction" => 0.01 * f,
        "carbon_oxygen_ratio" => 0.5 * f,

        // Cloud collapse
        "specific_angular_momentum" => 1e15 * f,
        "rotation_period" => 86_400.0 * f,
        "free_fall_time" => 1e13 * f,

        // Protoplanetary disk
        "disk_mass" => 0.01 * SOLAR_MASS * f,
        "frost_line_radius" => 2.7 * AU * f,
        "temperature_at_1AU" => 280.0 * f,

        // Accretion
        "terrestrial_planet_mass" => EARTH_MASS * 10f64.powf(f - 1.0),
        "semi_major_axis" => AU * f,
        "eccentricity" => 0.1 * f,

        // Differentiation
        "core_fraction" => 0.33 * (1.0 + (f - 1.0) * 0.1),
        "magnetic_field" => 50e-6 * f,
        "heat_flow" => 0.1 * f,

        // Surface and life
        "ocean_mass_fraction" => 0.0003 * f,
        "atmospheric_pressure" => 101_325.0 * f,
        "organic_carbon_concentration" => 1e-6 * f,
        "ph_value" => 7.0 + (f - 1.0) * 2.0,

        _ => return None,
    };
    Some(value)
}

/// All stages, ordered by start time
pub fn stages() -> &'static [Stage] {
    &STAGES
}

/// Look up a stage by id
pub fn stage(id: &str) -> Option<&'static Stage> {
    STAGES.iter().find(|s| s.id == id)
}

/// First stage whose `[start, end]` window contains `time` (s)
pub fn stage_at_time(time: f64) -> Option<&'static Stage> {
    STAGES
        .iter()
        .find(|s| time >= s.time_start && time <= s.time_end)
}

impl Stage {
    /// Fraction of this stage elapsed at `time`, clamped to `[0, 1]`
    pub fn progress(&self, time: f64) -> f64 {
        if time < self.time_start {
            return 0.0;
        }
        if time > self.time_end {
            return 1.0;
        }
        let duration = self.time_end - self.time_start;
        if duration <= 0.0 {
            return 1.0;
        }
        (time - self.time_start) / duration
    }

    /// Human-readable age at the end of this stage, e.g. `"4.57 billion years"`
    pub fn time_scale_label(&self) -> String {
        const MINUTE: f64 = 60.0;
        const HOUR: f64 = 3600.0;
        const DAY: f64 = 86_400.0;

        let t = self.time_end;
        if t < 1e-30 {
            format!("{:.1e} Planck times", t * 1e43)
        } else if t < 1e-6 {
            format!("{t:.1e} seconds")
        } else if t < MINUTE {
            format!("{t:.3} seconds")
        } else if t < HOUR {
            format!("{:.1} minutes", t / MINUTE)
        } else if t < DAY {
            format!("{:.1} hours", t / HOUR)
        } else if t < YEAR {
            format!("{:.1} days", t / DAY)
        } else if t < 1e6 * YEAR {
            format!("{:.0} thousand years", t / YEAR / 1e3)
        } else if t < 1e9 * YEAR {
            format!("{:.0} million years", t / YEAR / 1e6)
        } else {
            format!("{:.2} billion years", t / YEAR / 1e9)
        }
    }
}
