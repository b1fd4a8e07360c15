use serde::{Deserialize, Serialize};

use crate::constants::STANDARD_ATMOSPHERE;

/// Pressure in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(f64);

impl Pressure {
    pub fn from_pascals(value: f64) -> Self {
        Self(value)
    }

    pub fn from_atmospheres(value: f64) -> Self {
        Self(value * STANDARD_ATMOSPHERE)
    }

    pub fn from_bar(value: f64) -> Self {
        Self(value * 1.0e5)
    }

    pub fn to_pascals(&self) -> f64 {
        self.0
    }

    /// Ratio to Earth's sea-level pressure
    pub fn to_atmospheres(&self) -> f64 {
        self.0 / STANDARD_ATMOSPHERE
    }

    pub fn to_bar(&self) -> f64 {
        self.0 / 1.0e5
    }
}
