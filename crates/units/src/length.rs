use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

use crate::constants::{AU, EARTH_RADIUS, SOLAR_RADIUS};

/// A physical length quantity using f64 precision.
///
/// Base unit is the meter. Orbital distances convert to AU and body sizes to
/// Earth or solar radii.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// let radius = Length::from_earth_radii(1.0);
///
/// assert!((orbit.to_au() - 1.0).abs() < 1e-12);
/// assert!(orbit.to_meters() > radius.to_meters());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: m

impl Length {
    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS)
    }

    pub fn to_meters(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / 1000.0
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS
    }

    /// Square of the length in m²
    pub fn squared(&self) -> f64 {
        self.0 * self.0
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
