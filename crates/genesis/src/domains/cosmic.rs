//! Cosmic domain: the universe-scale constants a world inherits
//!
//! Primordial chemistry, expansion, the galactic neighbourhood and the parent
//! molecular cloud. Nothing here depends on other domains.

use sampling::RandomSource;
use serde::{Deserialize, Serialize};
use units::constants::{BOLTZMANN, LIGHT_YEAR, MEGAPARSEC, SOLAR_MASS};

use super::{DomainContext, weights};

/// Universe-scale constants for one world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicProfile {
    pub time_dilation: f64,
    /// J/K
    pub entropy_baseline: f64,
    /// Hubble rate in s⁻¹
    pub expansion_rate: f64,
    /// Hubble constant in km/s/Mpc
    pub hubble_expansion_rate: f64,
    pub cosmic_curvature: f64,

    // Primordial mass fractions, summing to 1
    pub hydrogen_fraction: f64,
    pub helium_fraction: f64,
    pub lithium_fraction: f64,

    pub dark_matter_density: f64,
    /// K
    pub cmb_temperature: f64,
    pub pop3_imf_slope: f64,
    /// J
    pub supernova_energy: f64,
    /// kg
    pub iron_peak_yield: f64,

    /// Distance from the galactic core (m)
    pub distance_from_core: f64,
    /// Metal mass fraction Z
    pub metallicity: f64,
    /// Galactic orbital velocity (m/s)
    pub orbital_velocity: f64,

    /// Parent molecular cloud mass (kg)
    pub cloud_mass: f64,
    pub dust_to_gas_ratio: f64,
    /// K
    pub cloud_temperature: f64,
}

/// Dust fraction at which grain cooling saturates
const DUST_SATURATION: f64 = 0.01;

pub fn generate<S: RandomSource>(ctx: &mut DomainContext<'_, S>) -> CosmicProfile {
    let time_dilation = ctx.vary(ctx.pick("time_dilation_constant", 1.0));
    let entropy_baseline = ctx.vary(ctx.pick("entropy_baseline", BOLTZMANN * 1e120_f64.ln()));
    let hubble_expansion_rate = ctx.vary(ctx.pick("hubble_expansion_rate", 67.4));
    let curvature_sigma = ctx.sigma() * 0.01;
    let cosmic_curvature = ctx.jitter(ctx.pick("cosmic_curvature", 0.0), curvature_sigma);

    let primordial = ctx.vary_fractions(weights([
        ("H", ctx.pick("hydrogen_fraction", 0.75)),
        ("He", ctx.pick("helium_fraction", 0.25)),
        ("Li", ctx.pick("lithium_fraction", 1e-10)),
    ]));

    let dark_matter_density = ctx.vary(ctx.pick("dark_matter_density", 0.268));
    let cmb_temperature = ctx.vary(ctx.pick("cmb_temperature", 2.725));
    let pop3_imf_slope = ctx.vary(ctx.pick("pop3_imf_slope", -2.35));
    let supernova_energy = ctx.vary(ctx.pick("supernova_energy", 1e44));
    let iron_peak_yield = ctx.vary(ctx.pick("iron_peak_yield", 0.1 * SOLAR_MASS));

    let distance_from_core = ctx.vary(ctx.pick("distance_from_core", 8000.0 * LIGHT_YEAR));
    let metallicity = ctx.vary(ctx.pick("metallicity", 0.02));
    let orbital_velocity = ctx.vary(ctx.pick("orbital_velocity", 220_000.0));

    let cloud_mass = ctx.vary(ctx.pick("molecular_cloud_mass", 1e5 * SOLAR_MASS));
    let dust_to_gas_ratio = ctx.vary(ctx.pick("dust_fraction", DUST_SATURATION));
    let cloud_temperature = ctx.vary(cloud_temperature(dust_to_gas_ratio));

    CosmicProfile {
        time_dilation,
        entropy_baseline,
        expansion_rate: hubble_expansion_rate * 1000.0 / MEGAPARSEC,
        hubble_expansion_rate,
        cosmic_curvature,
        hydrogen_fraction: fraction(&primordial, "H"),
        helium_fraction: fraction(&primordial, "He"),
        lithium_fraction: fraction(&primordial, "Li"),
        dark_matter_density,
        cmb_temperature,
        pop3_imf_slope,
        supernova_energy,
        iron_peak_yield,
        distance_from_core,
        metallicity,
        orbital_velocity,
        cloud_mass,
        dust_to_gas_ratio,
        cloud_temperature,
    }
}

/// Molecular cloud temperature (K)
///
/// 15 K for a dust-free cloud, falling to 10.5 K once dust cooling saturates.
pub fn cloud_temperature(dust_to_gas_ratio: f64) -> f64 {
    15.0 * (1.0 - 0.3 * (dust_to_gas_ratio / DUST_SATURATION).min(1.0))
}

fn fraction(map: &std::collections::BTreeMap<String, f64>, key: &str) -> f64 {
    map.get(key).copied().unwrap_or(0.0)
}
