//! Chemistry domain: surface chemistry and volatile inventory

use std::collections::BTreeMap;

use sampling::RandomSource;
use serde::{Deserialize, Serialize};
use units::constants::EARTH_SOLAR_CONSTANT;

use super::{AtmosphericProfile, DomainContext, PlanetaryProfile, StellarProfile, weights};

/// Scalars the chemistry module reads from earlier domains
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChemistryInputs {
    /// m
    pub frost_line_radius: f64,
    /// m
    pub orbital_radius: f64,
    /// W/m²
    pub solar_constant: f64,
    /// Combined H2 + CH4 + NH3 mole fraction
    pub reducing_fraction: f64,
    /// Z / Z☉
    pub metallicity_factor: f64,
}

impl ChemistryInputs {
    pub fn new(
        stellar: &StellarProfile,
        planetary: &PlanetaryProfile,
        atmospheric: &AtmosphericProfile,
    ) -> Self {
        Self {
            frost_line_radius: stellar.frost_line_radius.to_meters(),
            orbital_radius: planetary.orbital_radius.to_meters(),
            solar_constant: atmospheric.solar_constant,
            reducing_fraction: atmospheric.fraction("H2")
                + atmospheric.fraction("CH4")
                + atmospheric.fraction("NH3"),
            metallicity_factor: atmospheric.metallicity_factor,
        }
    }

    pub fn beyond_frost_line(&self) -> bool {
        self.orbital_radius > self.frost_line_radius
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemistryProfile {
    pub ph_value: f64,
    /// Mass fraction of organic carbon in surface water
    pub organic_carbon_concentration: f64,
    /// Relative rate of abiotic amino acid synthesis
    pub amino_acid_formation_rate: f64,
    /// H2O/CO2/NH3/CH4 → fraction, summing to 1
    pub volatile_ratios: BTreeMap<String, f64>,
}

pub fn generate<S: RandomSource>(
    ctx: &mut DomainContext<'_, S>,
    inputs: &ChemistryInputs,
) -> ChemistryProfile {
    let ph_sigma = 2.0 * ctx.sigma();
    let ph_value = ctx.jitter(ctx.pick("ph_value", 7.0), ph_sigma).clamp(0.0, 14.0);
    let organic_carbon_concentration = ctx.vary(ctx.pick("organic_carbon_concentration", 1e-6));
    let amino_acid_formation_rate = ctx.vary(amino_acid_formation_rate(
        organic_carbon_concentration,
        inputs.solar_constant,
        inputs.reducing_fraction,
    ));
    let volatile_ratios = ctx.vary_fractions(volatile_weights(
        inputs.beyond_frost_line(),
        inputs.metallicity_factor,
    ));

    ChemistryProfile {
        ph_value,
        organic_carbon_concentration,
        amino_acid_formation_rate,
        volatile_ratios,
    }
}

/// Miller–Urey style synthesis rate
///
/// Scales with organic carbon, with UV-driven energy input (flux relative to
/// Earth's) and strongly with reducing gases in the atmosphere.
pub fn amino_acid_formation_rate(organic_carbon: f64, solar_constant: f64, reducing_fraction: f64) -> f64 {
    organic_carbon * (solar_constant / EARTH_SOLAR_CONSTANT) * (1.0 + 10.0 * reducing_fraction) * 1e-9
}

/// Unnormalized volatile inventory either side of the frost line
///
/// Beyond it ices survive and water dominates; within it the inventory is dry
/// and carbon dioxide leads, with water rising with metallicity.
pub fn volatile_weights(beyond_frost_line: bool, metallicity_factor: f64) -> BTreeMap<String, f64> {
    if beyond_frost_line {
        weights([("H2O", 0.5), ("CO2", 0.05), ("NH3", 0.02), ("CH4", 0.03)])
    } else {
        weights([
            ("H2O", 0.001 * (1.0 + metallicity_factor)),
            ("CO2", 0.01),
            ("NH3", 0.0001),
            ("CH4", 0.0002),
        ])
    }
}
