//! Flat read API over a session
//!
//! Consumers read named scalars from [`Genesis`] and never see profile
//! records. The first getter may evaluate several domains; every later read
//! is served from the kernel's cache.
//!
//! ```
//! use genesis::Genesis;
//!
//! let mut world = Genesis::new("genesis");
//! let inner = world.habitable_zone_inner().unwrap();
//! let outer = world.habitable_zone_outer().unwrap();
//! assert!(inner < outer);
//! assert!(world.gravity().unwrap() > 0.0);
//! ```

use std::collections::BTreeMap;

use sampling::{KeyedSource, SeededStream};
use tracing::{info, warn};

use crate::authority::RandomnessAuthority;
use crate::config::GenesisConfig;
use crate::domain::Domain;
use crate::domains::{
    AtmosphericProfile, ChemistryProfile, CosmicProfile, DerivedProfile, PlanetaryProfile,
    StellarProfile,
};
use crate::error::Result;
use crate::kernel::Kernel;
use crate::profile::{DomainProfile, WorldConstants};
use crate::timeline::OverrideTable;
use crate::validation::{self, Severity, ValidationWarning};

/// One world: a single seed, a single session
#[derive(Debug)]
pub struct Genesis<S = SeededStream> {
    kernel: Kernel<S>,
}

impl Genesis<SeededStream> {
    /// Session with the default configuration
    pub fn new(seed: impl Into<String>) -> Self {
        Self::from_parts(seed, GenesisConfig::default())
    }

    /// Session with a custom configuration, validated first
    pub fn with_config(seed: impl Into<String>, config: GenesisConfig) -> Result<Self> {
        Self::with_source_config(seed, config)
    }
}

impl<S: KeyedSource> Genesis<S> {
    /// [`with_config`](Genesis::with_config) over any keyed random source
    pub fn with_source_config(seed: impl Into<String>, config: GenesisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(seed, config))
    }

    fn from_parts(seed: impl Into<String>, config: GenesisConfig) -> Self {
        let authority =
            RandomnessAuthority::new(seed, &config.timeline).with_pinned(config.pinned);
        Self {
            kernel: Kernel::new(authority, config.noise),
        }
    }

    pub fn seed(&self) -> &str {
        self.kernel.authority().seed()
    }

    /// Raw constants produced by the cosmic timeline
    pub fn overrides(&self) -> &OverrideTable {
        self.kernel.authority().overrides()
    }

    /// Every profile, resolving whatever is still missing
    pub fn all_constants(&mut self) -> Result<WorldConstants> {
        self.kernel.all_constants()
    }

    /// Plausibility warnings for the finished world, each also logged
    pub fn warnings(&mut self) -> Result<Vec<ValidationWarning>> {
        let world = self.kernel.all_constants()?;
        let warnings = validation::validate(&world);
        for w in &warnings {
            match w.severity {
                Severity::Info => info!(parameter = w.parameter, value = w.value, "{}", w.message),
                Severity::Warning | Severity::Extreme => warn!(
                    parameter = w.parameter,
                    value = w.value,
                    severity = ?w.severity,
                    "{}",
                    w.message
                ),
            }
        }
        Ok(warnings)
    }

    /// Whether `domain` has been evaluated yet
    pub fn is_computed(&self, domain: Domain) -> bool {
        self.kernel.is_computed(domain)
    }

    fn read<P: DomainProfile, T>(&mut self, f: impl FnOnce(&P) -> T) -> Result<T> {
        self.kernel.get::<P>().map(f)
    }

    // Cosmic

    /// Hubble constant (km/s/Mpc)
    pub fn hubble_constant(&mut self) -> Result<f64> {
        self.read(|c: &CosmicProfile| c.hubble_expansion_rate)
    }

    /// K
    pub fn cmb_temperature(&mut self) -> Result<f64> {
        self.read(|c: &CosmicProfile| c.cmb_temperature)
    }

    pub fn metallicity(&mut self) -> Result<f64> {
        self.read(|c: &CosmicProfile| c.metallicity)
    }

    pub fn dark_matter_density(&mut self) -> Result<f64> {
        self.read(|c: &CosmicProfile| c.dark_matter_density)
    }

    // Stellar

    /// kg
    pub fn stellar_mass(&mut self) -> Result<f64> {
        self.read(|s: &StellarProfile| s.stellar_mass.to_kg())
    }

    /// W
    pub fn stellar_luminosity(&mut self) -> Result<f64> {
        self.read(|s: &StellarProfile| s.stellar_luminosity)
    }

    /// m
    pub fn stellar_radius(&mut self) -> Result<f64> {
        self.read(|s: &StellarProfile| s.stellar_radius.to_meters())
    }

    /// K
    pub fn stellar_temperature(&mut self) -> Result<f64> {
        self.read(|s: &StellarProfile| s.stellar_temperature)
    }

    /// m
    pub fn frost_line_radius(&mut self) -> Result<f64> {
        self.read(|s: &StellarProfile| s.frost_line_radius.to_meters())
    }

    // Planetary

    /// kg
    pub fn planet_mass(&mut self) -> Result<f64> {
        self.read(|p: &PlanetaryProfile| p.planet_mass.to_kg())
    }

    /// m
    pub fn planet_radius(&mut self) -> Result<f64> {
        self.read(|p: &PlanetaryProfile| p.planet_radius.to_meters())
    }

    /// Surface gravity (m/s²)
    pub fn gravity(&mut self) -> Result<f64> {
        self.read(|p: &PlanetaryProfile| p.gravity)
    }

    /// Semi-major axis (m)
    pub fn orbital_radius(&mut self) -> Result<f64> {
        self.read(|p: &PlanetaryProfile| p.orbital_radius.to_meters())
    }

    pub fn eccentricity(&mut self) -> Result<f64> {
        self.read(|p: &PlanetaryProfile| p.eccentricity)
    }

    pub fn core_fraction(&mut self) -> Result<f64> {
        self.read(|p: &PlanetaryProfile| p.core_fraction)
    }

    /// T
    pub fn magnetic_field(&mut self) -> Result<f64> {
        self.read(|p: &PlanetaryProfile| p.magnetic_field)
    }

    pub fn ocean_mass_fraction(&mut self) -> Result<f64> {
        self.read(|p: &PlanetaryProfile| p.ocean_mass_fraction)
    }

    // Atmospheric

    /// Pa
    pub fn atmospheric_pressure(&mut self) -> Result<f64> {
        self.read(|a: &AtmosphericProfile| a.atmospheric_pressure.to_pascals())
    }

    /// Gas → mole fraction, summing to 1
    pub fn atmospheric_composition(&mut self) -> Result<BTreeMap<String, f64>> {
        self.read(|a: &AtmosphericProfile| a.atmospheric_composition.clone())
    }

    /// Stellar flux at the planet (W/m²)
    pub fn solar_radiation(&mut self) -> Result<f64> {
        self.read(|a: &AtmosphericProfile| a.solar_constant)
    }

    pub fn uv_index(&mut self) -> Result<f64> {
        self.read(|a: &AtmosphericProfile| a.uv_index)
    }

    // Chemistry

    pub fn ph(&mut self) -> Result<f64> {
        self.read(|c: &ChemistryProfile| c.ph_value)
    }

    pub fn organic_carbon_concentration(&mut self) -> Result<f64> {
        self.read(|c: &ChemistryProfile| c.organic_carbon_concentration)
    }

    pub fn amino_acid_formation_rate(&mut self) -> Result<f64> {
        self.read(|c: &ChemistryProfile| c.amino_acid_formation_rate)
    }

    /// H2O/CO2/NH3/CH4 → fraction, summing to 1
    pub fn volatile_ratios(&mut self) -> Result<BTreeMap<String, f64>> {
        self.read(|c: &ChemistryProfile| c.volatile_ratios.clone())
    }

    // Derived

    /// m/s
    pub fn escape_velocity(&mut self) -> Result<f64> {
        self.read(|d: &DerivedProfile| d.escape_velocity)
    }

    /// m
    pub fn hill_sphere(&mut self) -> Result<f64> {
        self.read(|d: &DerivedProfile| d.hill_sphere.to_meters())
    }

    /// m
    pub fn habitable_zone_inner(&mut self) -> Result<f64> {
        self.read(|d: &DerivedProfile| d.habitable_zone_inner.to_meters())
    }

    /// m
    pub fn habitable_zone_outer(&mut self) -> Result<f64> {
        self.read(|d: &DerivedProfile| d.habitable_zone_outer.to_meters())
    }

    /// s
    pub fn tidal_locking_timescale(&mut self) -> Result<f64> {
        self.read(|d: &DerivedProfile| d.tidal_locking_timescale)
    }

    /// K
    pub fn surface_temperature(&mut self) -> Result<f64> {
        self.read(|d: &DerivedProfile| d.surface_temperature)
    }

    /// m²/s
    pub fn specific_angular_momentum(&mut self) -> Result<f64> {
        self.read(|d: &DerivedProfile| d.specific_angular_momentum)
    }

    pub fn habitability_index(&mut self) -> Result<f64> {
        self.read(|d: &DerivedProfile| d.habitability_index)
    }
}
