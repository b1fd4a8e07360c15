//! Profile records and the full constant set

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::domains::{
    AtmosphericProfile, ChemistryProfile, CosmicProfile, DerivedProfile, PlanetaryProfile,
    StellarProfile,
};

/// A computed profile for any domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "lowercase")]
pub enum Profile {
    Cosmic(CosmicProfile),
    Stellar(StellarProfile),
    Planetary(PlanetaryProfile),
    Atmospheric(AtmosphericProfile),
    Chemistry(ChemistryProfile),
    Derived(DerivedProfile),
}

impl Profile {
    /// The domain that owns this profile
    pub fn domain(&self) -> Domain {
        match self {
            Profile::Cosmic(_) => Domain::Cosmic,
            Profile::Stellar(_) => Domain::Stellar,
            Profile::Planetary(_) => Domain::Planetary,
            Profile::Atmospheric(_) => Domain::Atmospheric,
            Profile::Chemistry(_) => Domain::Chemistry,
            Profile::Derived(_) => Domain::Derived,
        }
    }
}

/// Typed access to one variant of [`Profile`]
pub trait DomainProfile: Sized {
    const DOMAIN: Domain;

    fn from_profile(profile: &Profile) -> Option<&Self>;
}

macro_rules! domain_profile {
    ($ty:ty, $variant:ident) => {
        impl DomainProfile for $ty {
            const DOMAIN: Domain = Domain::$variant;

            fn from_profile(profile: &Profile) -> Option<&Self> {
                match profile {
                    Profile::$variant(p) => Some(p),
                    _ => None,
                }
            }
        }
    };
}

domain_profile!(CosmicProfile, Cosmic);
domain_profile!(StellarProfile, Stellar);
domain_profile!(PlanetaryProfile, Planetary);
domain_profile!(AtmosphericProfile, Atmospheric);
domain_profile!(ChemistryProfile, Chemistry);
domain_profile!(DerivedProfile, Derived);

/// Every profile of one world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConstants {
    pub cosmic: CosmicProfile,
    pub stellar: StellarProfile,
    pub planetary: PlanetaryProfile,
    pub atmospheric: AtmosphericProfile,
    pub chemistry: ChemistryProfile,
    pub derived: DerivedProfile,
}
