//! Atmospheric domain: surface pressure, gas mix and irradiation

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;

use sampling::RandomSource;
use serde::{Deserialize, Serialize};
use units::constants::{AU, EARTH_MASS, EARTH_SOLAR_CONSTANT};
use units::{Mass, Pressure};

use super::{CosmicProfile, DomainContext, PlanetaryProfile, StellarProfile, weights};

/// Solar metallicity
pub const SOLAR_METALLICITY: f64 = 0.02;

/// Metallicity above which a rocky world's atmosphere is outgassed CO2
pub const OUTGASSING_METALLICITY: f64 = 0.015;

/// Solar effective temperature (K)
const SOLAR_TEMPERATURE: f64 = 5778.0;

/// Standard gravity (m/s²)
const STANDARD_GRAVITY: f64 = 9.80665;

/// Scalars the atmosphere is derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericInputs {
    /// K
    pub stellar_temperature: f64,
    /// W
    pub stellar_luminosity: f64,
    pub planet_mass: Mass,
    /// m
    pub orbital_radius: f64,
    /// m/s²
    pub gravity: f64,
    pub metallicity: f64,
}

impl AtmosphericInputs {
    pub fn new(stellar: &StellarProfile, planetary: &PlanetaryProfile, cosmic: &CosmicProfile) -> Self {
        Self {
            stellar_temperature: stellar.stellar_temperature,
            stellar_luminosity: stellar.stellar_luminosity,
            planet_mass: planetary.planet_mass,
            orbital_radius: planetary.orbital_radius.to_meters(),
            gravity: planetary.gravity,
            metallicity: cosmic.metallicity,
        }
    }
}

/// Broad atmosphere class, deciding which gases dominate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereRegime {
    /// Massive, cool world holding on to primordial hydrogen and helium
    HydrogenRich,
    /// Rocky world above [`OUTGASSING_METALLICITY`], dominated by outgassed CO2
    Outgassed,
    /// Nitrogen-oxygen atmosphere
    Temperate,
}

impl AtmosphereRegime {
    /// Pick the regime for a planet
    ///
    /// # Arguments
    /// * `planet_mass_earth` - Planet mass in Earth masses
    /// * `orbital_radius_au` - Semi-major axis in AU
    /// * `metallicity_factor` - Z / Z☉
    pub fn classify(planet_mass_earth: f64, orbital_radius_au: f64, metallicity_factor: f64) -> Self {
        if planet_mass_earth > 2.0 && orbital_radius_au >= 0.5 {
            AtmosphereRegime::HydrogenRich
        } else if metallicity_factor * SOLAR_METALLICITY > OUTGASSING_METALLICITY {
            AtmosphereRegime::Outgassed
        } else {
            AtmosphereRegime::Temperate
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AtmosphereRegime::HydrogenRich => "Hydrogen-rich",
            AtmosphereRegime::Outgassed => "Outgassed",
            AtmosphereRegime::Temperate => "Temperate",
        }
    }

    /// Unnormalized gas weights
    ///
    /// `metallicity_factor` scales the hydrogen envelope's carbon and nitrogen
    /// carriers; `stellar_factor` (T★/T☉, clamped) scales photochemical products.
    fn base_weights(&self, metallicity_factor: f64, stellar_factor: f64) -> BTreeMap<String, f64> {
        let z = metallicity_factor;
        match self {
            AtmosphereRegime::HydrogenRich => weights([
                ("H2", 0.85),
                ("He", 0.13),
                ("CH4", 0.015 * z),
                ("NH3", 0.005 * z),
            ]),
            AtmosphereRegime::Outgassed => weights([
                ("CO2", 0.96),
                ("N2", 0.03),
                ("Ar", 0.01),
            ]),
            AtmosphereRegime::Temperate => weights([
                ("N2", 0.78),
                ("O2", 0.21 * stellar_factor),
                ("Ar", 0.0093),
                ("CO2", 0.0004),
                ("H2O", 0.0006 * stellar_factor),
            ]),
        }
    }
}

impl fmt::Display for AtmosphereRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Atmosphere and irradiation at the planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericProfile {
    pub atmospheric_pressure: Pressure,
    pub regime: AtmosphereRegime,
    /// Gas → mole fraction, summing to 1
    pub atmospheric_composition: BTreeMap<String, f64>,
    /// Stellar flux at the orbit (W/m²)
    pub solar_constant: f64,
    pub uv_index: f64,
    /// Z / Z☉
    pub metallicity_factor: f64,
}

impl AtmosphericProfile {
    /// Mole fraction of `gas`, zero when absent
    pub fn fraction(&self, gas: &str) -> f64 {
        self.atmospheric_composition.get(gas).copied().unwrap_or(0.0)
    }
}

pub fn generate<S: RandomSource>(
    ctx: &mut DomainContext<'_, S>,
    inputs: &AtmosphericInputs,
) -> AtmosphericProfile {
    let pressure_default = Pressure::from_atmospheres(inputs.gravity / STANDARD_GRAVITY);
    let atmospheric_pressure =
        ctx.vary_positive(ctx.pick("atmospheric_pressure", pressure_default.to_pascals()), 1.0);

    let metallicity_factor = inputs.metallicity / SOLAR_METALLICITY;
    let stellar_factor = (inputs.stellar_temperature / SOLAR_TEMPERATURE).clamp(0.2, 2.0);
    let regime = AtmosphereRegime::classify(
        inputs.planet_mass.to_kg() / EARTH_MASS,
        inputs.orbital_radius / AU,
        metallicity_factor,
    );
    let atmospheric_composition =
        ctx.vary_fractions(regime.base_weights(metallicity_factor, stellar_factor));

    let solar_constant = solar_constant(inputs.stellar_luminosity, inputs.orbital_radius);
    let uv_index = ctx.vary(uv_index(solar_constant, inputs.stellar_temperature));

    AtmosphericProfile {
        atmospheric_pressure: Pressure::from_pascals(atmospheric_pressure),
        regime,
        atmospheric_composition,
        solar_constant,
        uv_index,
        metallicity_factor,
    }
}

/// Stellar flux `L / 4πa²` (W/m²)
pub fn solar_constant(luminosity: f64, orbital_radius: f64) -> f64 {
    luminosity / (4.0 * PI * orbital_radius * orbital_radius)
}

/// UV index relative to Earth's noon value of 8
///
/// Hot stars (above 6000 K) emit 15% of their flux in the UV, cooler ones 8%.
pub fn uv_index(solar_constant: f64, stellar_temperature: f64) -> f64 {
    let uv_share = if stellar_temperature > 6000.0 { 0.15 } else { 0.08 };
    8.0 * (solar_constant * uv_share) / (EARTH_SOLAR_CONSTANT * 0.08)
}
