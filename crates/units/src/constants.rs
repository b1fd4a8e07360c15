//! Physical constants in SI units
//!
//! Read-only reference values used throughout world generation. Everything here
//! is plain data; nothing in this module carries state.

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.674_30e-11;

/// Stefan–Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e8;

/// Mass of the Sun (kg)
pub const SOLAR_MASS: f64 = 1.988_47e30;

/// Nominal solar luminosity (W), IAU 2015 B3
pub const SOLAR_LUMINOSITY: f64 = 3.828e26;

/// Nominal solar radius (m), IAU 2015 B3
pub const SOLAR_RADIUS: f64 = 6.957e8;

/// Mass of the Earth (kg)
pub const EARTH_MASS: f64 = 5.972e24;

/// Mean radius of the Earth (m)
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Astronomical unit (m)
pub const AU: f64 = 1.495_978_707e11;

/// Light year (m)
pub const LIGHT_YEAR: f64 = 9.461e15;

/// Julian year (s)
pub const YEAR: f64 = 31_557_600.0;

/// Solar irradiance at 1 AU (W/m²)
pub const EARTH_SOLAR_CONSTANT: f64 = 1361.0;

/// Standard atmosphere at sea level (Pa)
pub const STANDARD_ATMOSPHERE: f64 = 101_325.0;

/// Blackbody equilibrium temperature of the Earth (K)
pub const EARTH_EQUILIBRIUM_TEMPERATURE: f64 = 255.0;

/// Megaparsec (m), for converting Hubble rates from km/s/Mpc to s⁻¹
pub const MEGAPARSEC: f64 = 3.085_677_581e22;
