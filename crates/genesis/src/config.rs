//! Session configuration
//!
//! All fields have defaults, so an empty JSON object is a valid configuration:
//!
//! ```
//! use genesis::GenesisConfig;
//!
//! let config = GenesisConfig::from_json(r#"{ "noise": { "stellar": 0.05 } }"#).unwrap();
//! assert_eq!(config.noise.stellar, 0.05);
//! assert!(config.timeline.enabled);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{Error, Result};

/// Top-level configuration for a generation session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisConfig {
    /// Cosmic timeline (override table) settings
    pub timeline: TimelineConfig,

    /// Per-domain stochastic perturbation settings
    pub noise: NoiseConfig,

    /// Constants fixed by the caller, e.g. `{ "metallicity": 0.0134 }`
    ///
    /// Applied on top of the timeline output and consulted by the domain
    /// modules like any other override, so the usual noise still applies.
    pub pinned: BTreeMap<String, f64>,
}

impl GenesisConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration with the timeline disabled: every module falls back to
    /// its formula defaults.
    pub fn without_timeline() -> Self {
        Self {
            timeline: TimelineConfig {
                enabled: false,
                ..TimelineConfig::default()
            },
            ..Self::default()
        }
    }

    /// Check every value is in range
    pub fn validate(&self) -> Result<()> {
        self.timeline.validate()?;
        self.noise.validate()?;
        for (name, value) in &self.pinned {
            if !value.is_finite() {
                return Err(Error::InvalidConfig {
                    field: "pinned",
                    reason: format!("{name} = {value} is not finite"),
                });
            }
        }
        Ok(())
    }
}

/// Settings for the cosmic timeline sub-generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// When false the override table is empty
    pub enabled: bool,

    /// Standard deviation of each stage seed factor, drawn around 1.0
    pub seed_factor_sigma: f64,

    /// Lower bound applied to every stage seed factor
    pub seed_factor_floor: f64,

    /// Upper bound applied to every stage seed factor
    pub seed_factor_ceiling: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            seed_factor_sigma: 0.1,
            seed_factor_floor: 0.01,
            seed_factor_ceiling: 3.0,
        }
    }
}

impl TimelineConfig {
    /// Largest accepted ceiling; `10^(f - 1)` scalings stay far inside f64 range
    pub const MAX_SEED_FACTOR_CEILING: f64 = 10.0;

    fn validate(&self) -> Result<()> {
        non_negative("timeline.seed_factor_sigma", self.seed_factor_sigma)?;
        if !(self.seed_factor_floor > 0.0 && self.seed_factor_floor <= 1.0) {
            return Err(Error::InvalidConfig {
                field: "timeline.seed_factor_floor",
                reason: format!("{} is outside (0, 1]", self.seed_factor_floor),
            });
        }
        if !(self.seed_factor_ceiling >= 1.0
            && self.seed_factor_ceiling <= Self::MAX_SEED_FACTOR_CEILING)
        {
            return Err(Error::InvalidConfig {
                field: "timeline.seed_factor_ceiling",
                reason: format!(
                    "{} is outside [1, {}]",
                    self.seed_factor_ceiling,
                    Self::MAX_SEED_FACTOR_CEILING
                ),
            });
        }
        Ok(())
    }
}

/// Fractional Gaussian noise applied inside each domain module
///
/// Every draw is clamped to `±clamp_sigmas · sigma`, so the configured noise
/// is a hard bound on how far a value can move from its base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub cosmic: f64,
    pub stellar: f64,
    pub planetary: f64,
    pub atmospheric: f64,
    pub chemistry: f64,
    pub derived: f64,

    /// Additive surface temperature noise (K)
    pub surface_temperature_kelvin: f64,

    /// Clamp for every Gaussian draw, in standard deviations
    pub clamp_sigmas: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            cosmic: 0.01,
            stellar: 0.02,
            planetary: 0.02,
            atmospheric: 0.05,
            chemistry: 0.05,
            derived: 0.01,
            surface_temperature_kelvin: 2.0,
            clamp_sigmas: 3.0,
        }
    }
}

impl NoiseConfig {
    /// No perturbation at all; streams are still consumed in the same order.
    pub fn quiet() -> Self {
        Self {
            cosmic: 0.0,
            stellar: 0.0,
            planetary: 0.0,
            atmospheric: 0.0,
            chemistry: 0.0,
            derived: 0.0,
            surface_temperature_kelvin: 0.0,
            ..Self::default()
        }
    }

    /// Fractional sigma for a domain
    pub fn sigma(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Cosmic => self.cosmic,
            Domain::Stellar => self.stellar,
            Domain::Planetary => self.planetary,
            Domain::Atmospheric => self.atmospheric,
            Domain::Chemistry => self.chemistry,
            Domain::Derived => self.derived,
        }
    }

    /// Largest relative change a perturbation can make in `domain`
    pub fn bound(&self, domain: Domain) -> f64 {
        self.sigma(domain) * self.clamp_sigmas
    }

    fn validate(&self) -> Result<()> {
        if !(self.clamp_sigmas.is_finite() && self.clamp_sigmas > 0.0) {
            return Err(Error::InvalidConfig {
                field: "noise.clamp_sigmas",
                reason: format!("{} must be positive", self.clamp_sigmas),
            });
        }
        non_negative(
            "noise.surface_temperature_kelvin",
            self.surface_temperature_kelvin,
        )?;

        for domain in Domain::ALL {
            let field = domain_field(domain);
            non_negative(field, self.sigma(domain))?;
            // Multiplicative factors must stay positive
            if self.bound(domain) >= 1.0 {
                return Err(Error::InvalidConfig {
                    field,
                    reason: format!(
                        "sigma {} with clamp {} allows non-positive scale factors",
                        self.sigma(domain),
                        self.clamp_sigmas
                    ),
                });
            }
        }
        Ok(())
    }
}

fn domain_field(domain: Domain) -> &'static str {
    match domain {
        Domain::Cosmic => "noise.cosmic",
        Domain::Stellar => "noise.stellar",
        Domain::Planetary => "noise.planetary",
        Domain::Atmospheric => "noise.atmospheric",
        Domain::Chemistry => "noise.chemistry",
        Domain::Derived => "noise.derived",
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field,
            reason: format!("{value} must be a finite, non-negative number"),
        })
    }
}
