//! The six domain modules
//!
//! Each module is a pure function of a [`DomainContext`] plus scalars from
//! earlier domains. A value is chosen as `override[key]` when the timeline
//! produced one, else a formula default, and is then perturbed with the
//! domain's own stream. Draws happen in a fixed order inside every module so
//! a seed always lands on the same numbers.

pub mod atmospheric;
pub mod chemistry;
pub mod cosmic;
pub mod derived;
pub mod planetary;
pub mod stellar;

#[cfg(test)]
mod chemistry_test;
#[cfg(test)]
mod stellar_test;

use std::collections::BTreeMap;

use sampling::RandomSource;

use crate::timeline::OverrideTable;

pub use atmospheric::{AtmosphereRegime, AtmosphericInputs, AtmosphericProfile};
pub use chemistry::{ChemistryInputs, ChemistryProfile};
pub use cosmic::CosmicProfile;
pub use derived::{DerivedInputs, DerivedProfile};
pub use planetary::PlanetaryProfile;
pub use stellar::StellarProfile;

/// What a domain module sees while it runs: its stream, the override table
/// and its noise settings
pub struct DomainContext<'a, S> {
    stream: &'a mut S,
    overrides: &'a OverrideTable,
    sigma: f64,
    clamp_sigmas: f64,
}

impl<'a, S: RandomSource> DomainContext<'a, S> {
    /// # Arguments
    /// * `sigma` - Fractional noise for this domain
    /// * `clamp_sigmas` - Every draw is clamped to this many standard deviations
    pub fn new(
        stream: &'a mut S,
        overrides: &'a OverrideTable,
        sigma: f64,
        clamp_sigmas: f64,
    ) -> Self {
        Self {
            stream,
            overrides,
            sigma,
            clamp_sigmas,
        }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Override for `key`, or `fallback` when the timeline has none
    pub fn pick(&self, key: &str, fallback: f64) -> f64 {
        self.overrides.get(key).unwrap_or(fallback)
    }

    /// Clamped Gaussian deviation with standard deviation `sigma`
    ///
    /// Always consumes the stream, even when `sigma` is zero, so that quiet
    /// noise settings leave later draws where they would otherwise be.
    pub fn deviation(&mut self, sigma: f64) -> f64 {
        let z = self.stream.gaussian(0.0, 1.0);
        z.clamp(-self.clamp_sigmas, self.clamp_sigmas) * sigma
    }

    /// Multiplicative perturbation: `value · (1 + δ)`, `δ ~ N(0, sigma)` clamped
    pub fn vary(&mut self, value: f64) -> f64 {
        value * (1.0 + self.deviation(self.sigma))
    }

    /// [`vary`](Self::vary) with a lower bound
    pub fn vary_positive(&mut self, value: f64, floor: f64) -> f64 {
        self.vary(value).max(floor)
    }

    /// Additive perturbation with an absolute standard deviation
    pub fn jitter(&mut self, value: f64, abs_sigma: f64) -> f64 {
        value + self.deviation(abs_sigma)
    }

    /// Perturb every weight in key order, then renormalize to sum to 1
    pub fn vary_fractions(&mut self, weights: BTreeMap<String, f64>) -> BTreeMap<String, f64> {
        let varied = weights
            .into_iter()
            .map(|(name, w)| {
                let w = self.vary(w);
                (name, w)
            })
            .collect();
        renormalize(varied)
    }
}

/// Scale non-negative weights so they sum to 1
///
/// Negative and non-finite weights are dropped to zero. If nothing positive
/// remains the fractions are split evenly.
pub fn renormalize(weights: BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let cleaned: BTreeMap<String, f64> = weights
        .into_iter()
        .map(|(k, w)| (k, if w.is_finite() && w > 0.0 { w } else { 0.0 }))
        .collect();
    let total: f64 = cleaned.values().sum();

    if total > 0.0 && total.is_finite() {
        cleaned.into_iter().map(|(k, w)| (k, w / total)).collect()
    } else {
        let even = 1.0 / cleaned.len().max(1) as f64;
        cleaned.into_keys().map(|k| (k, even)).collect()
    }
}

/// Build a named weight table from `(name, weight)` pairs
pub(crate) fn weights<const N: usize>(pairs: [(&str, f64); N]) -> BTreeMap<String, f64> {
    pairs
        .into_iter()
        .map(|(name, w)| (name.to_string(), w))
        .collect()
}
