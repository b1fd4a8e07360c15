use approx::assert_relative_eq;
use sampling::SeededStream;
use units::constants::AU;

use crate::domains::DomainContext;
use crate::domains::chemistry::{
    ChemistryInputs, amino_acid_formation_rate, generate, volatile_weights,
};
use crate::timeline::OverrideTable;

fn inputs(orbital_radius_au: f64) -> ChemistryInputs {
    ChemistryInputs {
        frost_line_radius: 2.7 * AU,
        orbital_radius: orbital_radius_au * AU,
        solar_constant: 1361.0,
        reducing_fraction: 0.0,
        metallicity_factor: 1.0,
    }
}

#[test]
fn test_frost_line_switch() {
    assert!(!inputs(1.0).beyond_frost_line());
    assert!(inputs(5.2).beyond_frost_line());
}

#[test]
fn test_amino_acid_rate_reference() {
    assert_relative_eq!(amino_acid_formation_rate(1e-6, 1361.0, 0.0), 1e-15);
    // Reducing atmospheres boost synthesis
    assert_relative_eq!(amino_acid_formation_rate(1e-6, 1361.0, 0.1), 2e-15);
}

#[test]
fn test_volatiles_beyond_frost_line_are_water_rich() {
    let w = volatile_weights(true, 1.0);
    assert!(w["H2O"] > w["CO2"]);
    assert_eq!(w.len(), 4);
}

#[test]
fn test_volatiles_within_frost_line_are_dry() {
    let w = volatile_weights(false, 1.0);
    assert!(w["CO2"] > w["H2O"]);
    assert_relative_eq!(w["H2O"], 0.002);
}

#[test]
fn test_neutral_ph_without_noise() {
    let mut stream = SeededStream::from_key("chem");
    let overrides = OverrideTable::new();
    let chem = generate(
        &mut DomainContext::new(&mut stream, &overrides, 0.0, 3.0),
        &inputs(1.0),
    );

    assert_eq!(chem.ph_value, 7.0);
    assert_relative_eq!(chem.organic_carbon_concentration, 1e-6);
    assert_relative_eq!(chem.volatile_ratios.values().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_ph_clamped_to_scale() {
    let mut stream = SeededStream::from_key("acid");
    let mut overrides = OverrideTable::new();
    overrides.insert("ph_value", -3.0);
    let chem = generate(
        &mut DomainContext::new(&mut stream, &overrides, 0.05, 3.0),
        &inputs(1.0),
    );

    assert_eq!(chem.ph_value, 0.0);
}

#[test]
fn test_volatiles_normalized_under_noise() {
    for (seed, orbit) in [("inner", 0.7), ("outer", 9.5)] {
        let mut stream = SeededStream::from_key(seed);
        let overrides = OverrideTable::new();
        let chem = generate(
            &mut DomainContext::new(&mut stream, &overrides, 0.05, 3.0),
            &inputs(orbit),
        );
        let total: f64 = chem.volatile_ratios.values().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }
}
