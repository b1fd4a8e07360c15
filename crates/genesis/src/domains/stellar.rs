//! Stellar domain: the host star and its protoplanetary disk

use std::f64::consts::PI;

use sampling::RandomSource;
use serde::{Deserialize, Serialize};
use units::constants::{AU, SOLAR_LUMINOSITY, SOLAR_MASS, SOLAR_RADIUS, STEFAN_BOLTZMANN};
use units::{Length, Mass};

use super::DomainContext;

/// Host star properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StellarProfile {
    pub disk_mass: Mass,
    pub stellar_mass: Mass,
    /// W
    pub stellar_luminosity: f64,
    pub stellar_radius: Length,
    /// Effective temperature (K)
    pub stellar_temperature: f64,
    pub frost_line_radius: Length,
    /// Disk temperature gradient at the frost line (K/m)
    pub temperature_gradient: f64,
}

/// Star-to-disk mass ratio
const DISK_TO_STAR: f64 = 100.0;

/// Water ice condensation temperature in the disk (K)
const FROST_TEMPERATURE: f64 = 170.0;

pub fn generate<S: RandomSource>(ctx: &mut DomainContext<'_, S>) -> StellarProfile {
    let disk_mass = ctx.vary(ctx.pick("disk_mass", 0.01 * SOLAR_MASS));
    let stellar_mass = ctx.vary(DISK_TO_STAR * disk_mass);
    let m = stellar_mass / SOLAR_MASS;

    let stellar_luminosity = ctx.vary(main_sequence_luminosity(m));
    let stellar_radius = main_sequence_radius(m);
    let stellar_temperature = effective_temperature(stellar_luminosity, stellar_radius);

    let frost_default = 2.7 * AU * (stellar_luminosity / SOLAR_LUMINOSITY).sqrt();
    let frost_line_radius = ctx.vary(ctx.pick("frost_line_radius", frost_default));

    StellarProfile {
        disk_mass: Mass::from_kg(disk_mass),
        stellar_mass: Mass::from_kg(stellar_mass),
        stellar_luminosity,
        stellar_radius: Length::from_meters(stellar_radius),
        stellar_temperature,
        frost_line_radius: Length::from_meters(frost_line_radius),
        temperature_gradient: disk_temperature_gradient(frost_line_radius),
    }
}

/// `L = L☉ · (M/M☉)^3.5` (W)
pub fn main_sequence_luminosity(mass_solar: f64) -> f64 {
    SOLAR_LUMINOSITY * mass_solar.powf(3.5)
}

/// `R = R☉ · (M/M☉)^0.8` (m)
pub fn main_sequence_radius(mass_solar: f64) -> f64 {
    SOLAR_RADIUS * mass_solar.powf(0.8)
}

/// Stefan–Boltzmann inversion of `L = 4πR²σT⁴` (K)
pub fn effective_temperature(luminosity: f64, radius: f64) -> f64 {
    (luminosity / (4.0 * PI * radius * radius * STEFAN_BOLTZMANN)).powf(0.25)
}

/// Gradient of a `T ∝ r^(-3/7)` passive disk at the frost line (K/m)
pub fn disk_temperature_gradient(frost_line_radius: f64) -> f64 {
    -(3.0 / 7.0) * FROST_TEMPERATURE / frost_line_radius
}
