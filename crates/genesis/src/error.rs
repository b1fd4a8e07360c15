//! Genesis errors

use thiserror::Error;

use crate::domain::Domain;

/// Genesis result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the evaluation kernel and configuration loading
///
/// Generation itself never fails: missing seed-derived data falls back to
/// formula defaults. Everything here is a programmer or configuration error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "unknown domain '{name}' (expected one of: cosmic, stellar, planetary, atmospheric, chemistry, derived)"
    )]
    UnknownDomain { name: String },

    #[error("dependency cycle detected while resolving {domain}: {}", chain_label(.chain))]
    DependencyCycle { domain: Domain, chain: Vec<Domain> },

    #[error("profile for {domain} missing after resolution")]
    Unresolved { domain: Domain },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid configuration value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

fn chain_label(chain: &[Domain]) -> String {
    chain
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(" -> ")
}
