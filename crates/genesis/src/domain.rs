//! The six physical domains a world is derived in

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the six named physical categories of a world
///
/// A domain is both the cache key in the evaluation kernel and the suffix of
/// its random stream key (`"<seed>_<label>"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Cosmic,
    Stellar,
    Planetary,
    Atmospheric,
    Chemistry,
    Derived,
}

impl Domain {
    /// Number of domains
    pub const COUNT: usize = 6;

    /// Every domain, leaves first
    pub const ALL: [Domain; Self::COUNT] = [
        Domain::Cosmic,
        Domain::Stellar,
        Domain::Planetary,
        Domain::Atmospheric,
        Domain::Chemistry,
        Domain::Derived,
    ];

    /// Lowercase name used for stream keys and lookups
    pub fn label(self) -> &'static str {
        match self {
            Domain::Cosmic => "cosmic",
            Domain::Stellar => "stellar",
            Domain::Planetary => "planetary",
            Domain::Atmospheric => "atmospheric",
            Domain::Chemistry => "chemistry",
            Domain::Derived => "derived",
        }
    }

    /// Position in [`Domain::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Domains whose profiles must exist before this one can be computed
    pub fn dependencies(self) -> &'static [Domain] {
        match self {
            Domain::Cosmic | Domain::Stellar | Domain::Planetary => &[],
            Domain::Atmospheric => &[Domain::Stellar, Domain::Planetary, Domain::Cosmic],
            Domain::Chemistry => &[Domain::Stellar, Domain::Planetary, Domain::Atmospheric],
            Domain::Derived => &[
                Domain::Planetary,
                Domain::Stellar,
                Domain::Atmospheric,
                Domain::Chemistry,
            ],
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Domain {
    type Err = Error;

    /// Exact, case-sensitive match on the domain label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| Error::UnknownDomain { name: s.to_string() })
    }
}
