//! Derived domain: quantities that combine the other five

use sampling::RandomSource;
use serde::{Deserialize, Serialize};
use units::constants::{
    AU, EARTH_EQUILIBRIUM_TEMPERATURE, EARTH_RADIUS, EARTH_SOLAR_CONSTANT, G, SOLAR_LUMINOSITY,
    SOLAR_MASS, STANDARD_ATMOSPHERE, YEAR,
};
use units::Length;

use super::{AtmosphericProfile, ChemistryProfile, DomainContext, PlanetaryProfile, StellarProfile};

/// Earth's pre-industrial CO2 mole fraction, the greenhouse reference
const REFERENCE_CO2: f64 = 0.0004;

/// Greenhouse warming per CO2 doubling at one atmosphere (K)
const GREENHOUSE_PER_DOUBLING: f64 = 33.0;

/// Lowest surface temperature reported (K)
const MIN_SURFACE_TEMPERATURE: f64 = 3.0;

/// Scalars the derived module reads from earlier domains
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedInputs {
    /// kg
    pub planet_mass: f64,
    /// m
    pub planet_radius: f64,
    /// m/s²
    pub gravity: f64,
    /// m
    pub orbital_radius: f64,
    /// kg
    pub stellar_mass: f64,
    /// W
    pub stellar_luminosity: f64,
    /// Pa
    pub atmospheric_pressure: f64,
    pub co2_fraction: f64,
    /// W/m²
    pub solar_constant: f64,
    pub ph_value: f64,
}

impl DerivedInputs {
    pub fn new(
        planetary: &PlanetaryProfile,
        stellar: &StellarProfile,
        atmospheric: &AtmosphericProfile,
        chemistry: &ChemistryProfile,
    ) -> Self {
        Self {
            planet_mass: planetary.planet_mass.to_kg(),
            planet_radius: planetary.planet_radius.to_meters(),
            gravity: planetary.gravity,
            orbital_radius: planetary.orbital_radius.to_meters(),
            stellar_mass: stellar.stellar_mass.to_kg(),
            stellar_luminosity: stellar.stellar_luminosity,
            atmospheric_pressure: atmospheric.atmospheric_pressure.to_pascals(),
            co2_fraction: atmospheric.fraction("CO2"),
            solar_constant: atmospheric.solar_constant,
            ph_value: chemistry.ph_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProfile {
    /// m/s
    pub escape_velocity: f64,
    pub hill_sphere: Length,
    pub habitable_zone_inner: Length,
    pub habitable_zone_outer: Length,
    /// s
    pub tidal_locking_timescale: f64,
    /// K
    pub surface_temperature: f64,
    /// m²/s
    pub specific_angular_momentum: f64,
    /// 0 (hostile) to 1 (Earth-like)
    pub habitability_index: f64,
}

impl DerivedProfile {
    pub fn in_habitable_zone(&self, orbital_radius: Length) -> bool {
        orbital_radius >= self.habitable_zone_inner && orbital_radius <= self.habitable_zone_outer
    }
}

/// # Arguments
/// * `surface_noise_kelvin` - Standard deviation of the additive surface temperature noise
pub fn generate<S: RandomSource>(
    ctx: &mut DomainContext<'_, S>,
    inputs: &DerivedInputs,
    surface_noise_kelvin: f64,
) -> DerivedProfile {
    let escape_velocity = escape_velocity(inputs.gravity, inputs.planet_radius);
    let hill_sphere = hill_sphere(inputs.orbital_radius, inputs.planet_mass, inputs.stellar_mass);
    let (inner, outer) = habitable_zone(inputs.stellar_luminosity);

    let tidal_locking_timescale = ctx.vary(tidal_locking_timescale(
        inputs.orbital_radius,
        inputs.stellar_mass,
        inputs.planet_radius,
    ));
    let surface_temperature = ctx
        .jitter(
            surface_temperature(
                inputs.solar_constant,
                inputs.co2_fraction,
                inputs.atmospheric_pressure,
            ),
            surface_noise_kelvin,
        )
        .max(MIN_SURFACE_TEMPERATURE);
    let angular_momentum_default = (G * inputs.stellar_mass * inputs.orbital_radius).sqrt();
    let specific_angular_momentum =
        ctx.vary(ctx.pick("specific_angular_momentum", angular_momentum_default));

    let in_zone = inputs.orbital_radius >= inner && inputs.orbital_radius <= outer;

    DerivedProfile {
        escape_velocity,
        hill_sphere: Length::from_meters(hill_sphere),
        habitable_zone_inner: Length::from_meters(inner),
        habitable_zone_outer: Length::from_meters(outer),
        tidal_locking_timescale,
        surface_temperature,
        specific_angular_momentum,
        habitability_index: habitability_index(surface_temperature, inputs.ph_value, in_zone),
    }
}

/// `v = √(2gR)` (m/s)
pub fn escape_velocity(gravity: f64, radius: f64) -> f64 {
    (2.0 * gravity * radius).sqrt()
}

/// `r_H = a · (M_p / 3M★)^(1/3)` (m)
pub fn hill_sphere(orbital_radius: f64, planet_mass: f64, stellar_mass: f64) -> f64 {
    orbital_radius * (planet_mass / (3.0 * stellar_mass)).cbrt()
}

/// Inner and outer habitable zone edges (m), `0.95` and `1.37 AU · √(L/L☉)`
pub fn habitable_zone(luminosity: f64) -> (f64, f64) {
    let scale = (luminosity / SOLAR_LUMINOSITY).sqrt();
    (0.95 * AU * scale, 1.37 * AU * scale)
}

/// Time for a planet to become tidally locked (s)
///
/// `10¹⁰ yr · (a/AU)⁶ / ((M★/M☉)² · (R/R⊕)⁵)`
pub fn tidal_locking_timescale(orbital_radius: f64, stellar_mass: f64, planet_radius: f64) -> f64 {
    let a = orbital_radius / AU;
    let m = stellar_mass / SOLAR_MASS;
    let r = planet_radius / EARTH_RADIUS;
    1e10 * YEAR * a.powi(6) / (m * m * r.powi(5))
}

/// Blackbody equilibrium plus a logarithmic CO2 greenhouse term (K)
///
/// Earth's flux, CO2 fraction and pressure give 255 K + 33 K = 288 K.
pub fn surface_temperature(solar_constant: f64, co2_fraction: f64, pressure: f64) -> f64 {
    let equilibrium =
        EARTH_EQUILIBRIUM_TEMPERATURE * (solar_constant / EARTH_SOLAR_CONSTANT).powf(0.25);
    let doublings = (1.0 + co2_fraction.max(0.0) / REFERENCE_CO2).ln() / std::f64::consts::LN_2;
    equilibrium + GREENHOUSE_PER_DOUBLING * doublings * (pressure / STANDARD_ATMOSPHERE)
}

/// Combined habitability score in `[0, 1]`
///
/// Gaussian in temperature around 288 K (40 K width), linear fall-off in pH
/// away from neutral, and a quarter weight outside the habitable zone.
pub fn habitability_index(surface_temperature: f64, ph_value: f64, in_habitable_zone: bool) -> f64 {
    let thermal = (-((surface_temperature - 288.0) / 40.0).powi(2)).exp();
    let acidity = (1.0 - (ph_value - 7.0).abs() / 4.0).clamp(0.0, 1.0);
    let orbit = if in_habitable_zone { 1.0 } else { 0.25 };
    thermal * acidity * orbit
}
