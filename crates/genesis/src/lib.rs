//! Deterministic world constants from a single seed
//!
//! A [`Genesis`] session owns a [`RandomnessAuthority`] (one stream per
//! domain plus the cosmic timeline's override table) and a [`Kernel`] that
//! lazily evaluates the six domain profiles in dependency order. The same
//! seed always produces bit-identical constants.
//!
//! ```
//! use genesis::{Domain, Genesis};
//!
//! let mut a = Genesis::new("alpha");
//! let mut b = Genesis::new("alpha");
//! assert_eq!(a.all_constants().unwrap(), b.all_constants().unwrap());
//!
//! assert!(a.is_computed(Domain::Derived));
//! ```

pub mod authority;
pub mod config;
pub mod domain;
pub mod domains;
pub mod error;
pub mod facade;
pub mod kernel;
pub mod profile;
pub mod timeline;
pub mod validation;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod domain_test;

pub use authority::RandomnessAuthority;
pub use config::{GenesisConfig, NoiseConfig, TimelineConfig};
pub use domain::Domain;
pub use error::{Error, Result};
pub use facade::Genesis;
pub use kernel::{DependencyGraph, Kernel};
pub use profile::{DomainProfile, Profile, WorldConstants};
pub use validation::{Severity, ValidationWarning};
