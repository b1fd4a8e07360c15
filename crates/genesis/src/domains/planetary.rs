//! Planetary domain: bulk properties of the world itself

use std::f64::consts::PI;

use sampling::RandomSource;
use serde::{Deserialize, Serialize};
use units::constants::{AU, EARTH_MASS, EARTH_RADIUS, G, YEAR};
use units::{Length, Mass};

use super::DomainContext;

/// Bulk planet properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryProfile {
    pub planet_mass: Mass,
    pub planet_radius: Length,
    /// Surface gravity (m/s²)
    pub gravity: f64,
    /// Semi-major axis
    pub orbital_radius: Length,
    pub eccentricity: f64,
    pub core_fraction: f64,
    pub mantle_fraction: f64,
    pub crust_thickness: Length,
    /// Surface field strength (T)
    pub magnetic_field: f64,
    pub ocean_mass_fraction: f64,
    /// kg/s
    pub water_delivery_rate: f64,
}

/// Earth's core mass fraction, the reference for the density scaling
pub const EARTH_CORE_FRACTION: f64 = 0.33;

/// Mass fraction left for the crust
const CRUST_FRACTION: f64 = 0.01;

/// Duration of the late heavy bombardment (s)
const WATER_DELIVERY_PERIOD: f64 = 300e6 * YEAR;

pub fn generate<S: RandomSource>(ctx: &mut DomainContext<'_, S>) -> PlanetaryProfile {
    let planet_mass = ctx.vary(ctx.pick("terrestrial_planet_mass", EARTH_MASS));
    let orbital_radius = ctx.vary(ctx.pick("semi_major_axis", AU));
    let eccentricity = ctx.vary(ctx.pick("eccentricity", 0.0167)).clamp(0.0, 0.95);
    let core_fraction = ctx
        .vary(ctx.pick("core_fraction", EARTH_CORE_FRACTION))
        .clamp(0.05, 0.9);
    let mantle_fraction = 1.0 - core_fraction - CRUST_FRACTION;

    let planet_radius = radius_from_mass(planet_mass, core_fraction);
    let gravity = surface_gravity(planet_mass, planet_radius);

    let crust_thickness = ctx.vary(CRUST_FRACTION * planet_radius);
    let magnetic_field = ctx.vary(ctx.pick("magnetic_field", 50e-6));
    let ocean_mass_fraction = ctx.vary(ctx.pick("ocean_mass_fraction", 0.0003));

    PlanetaryProfile {
        planet_mass: Mass::from_kg(planet_mass),
        planet_radius: Length::from_meters(planet_radius),
        gravity,
        orbital_radius: Length::from_meters(orbital_radius),
        eccentricity,
        core_fraction,
        mantle_fraction,
        crust_thickness: Length::from_meters(crust_thickness),
        magnetic_field,
        ocean_mass_fraction,
        water_delivery_rate: ocean_mass_fraction * planet_mass / WATER_DELIVERY_PERIOD,
    }
}

/// Mean density of the Earth (kg/m³)
pub fn earth_density() -> f64 {
    EARTH_MASS / (4.0 / 3.0 * PI * EARTH_RADIUS.powi(3))
}

/// Radius (m) of a body of `mass` (kg) whose density scales with core fraction
///
/// `ρ = ρ⊕ · (1 + 0.2·(core − 0.33))`, `R = (3M / 4πρ)^(1/3)`
pub fn radius_from_mass(mass: f64, core_fraction: f64) -> f64 {
    let density = earth_density() * (1.0 + 0.2 * (core_fraction - EARTH_CORE_FRACTION));
    (3.0 * mass / (4.0 * PI * density)).cbrt()
}

/// `g = G·M / R²` (m/s²)
pub fn surface_gravity(mass: f64, radius: f64) -> f64 {
    G * mass / (radius * radius)
}
