use approx::assert_relative_eq;
use sampling::SeededStream;
use units::constants::{AU, EARTH_MASS, YEAR};

use super::*;

fn generate_for(seed: &str) -> OverrideTable {
    let mut stream = SeededStream::from_key(&format!("{seed}_cosmic-timeline"));
    generate(&mut stream, &TimelineConfig::default())
}

#[test]
fn test_stages_are_ordered_by_start_time() {
    assert_eq!(stages().len(), 15);
    assert_eq!(stages()[0].id, "planck-epoch");
    assert_eq!(stages()[14].id, "surface-and-life");

    for pair in stages().windows(2) {
        assert!(
            pair[0].time_start <= pair[1].time_start,
            "{} starts after {}",
            pair[0].id,
            pair[1].id
        );
    }
    for s in stages() {
        assert!(s.time_start < s.time_end, "{} has an empty window", s.id);
    }
}

#[test]
fn test_every_stage_constant_has_a_formula() {
    for s in stages() {
        for c in s.constants {
            assert!(
                evaluate(c.name, 1.0).is_some(),
                "no formula for {} in {}",
                c.name,
                s.id
            );
            for p in c.seed_parameters {
                assert!(
                    s.seed_influence.contains(p),
                    "{} reads {} which {} never draws",
                    c.name,
                    p,
                    s.id
                );
            }
        }
    }
}

#[test]
fn test_unknown_constant_has_no_formula() {
    assert_eq!(evaluate("warp_factor", 1.0), None);
}

#[test]
fn test_unit_factor_gives_reference_values() {
    assert_relative_eq!(evaluate("hubble_expansion_rate", 1.0).unwrap(), 67.4);
    assert_relative_eq!(evaluate("cmb_temperature", 1.0).unwrap(), 2.725);
    assert_relative_eq!(evaluate("terrestrial_planet_mass", 1.0).unwrap(), EARTH_MASS);
    assert_relative_eq!(evaluate("semi_major_axis", 1.0).unwrap(), AU);
    assert_relative_eq!(evaluate("ph_value", 1.0).unwrap(), 7.0);
    assert_relative_eq!(evaluate("core_fraction", 1.0).unwrap(), 0.33);
    assert_eq!(evaluate("cosmic_curvature", 1.0), Some(0.0));
    assert_eq!(evaluate("alpha_element_ratio", 1.0), Some(0.0));
}

#[test]
fn test_planet_mass_scales_by_decades() {
    assert_relative_eq!(
        evaluate("terrestrial_planet_mass", 2.0).unwrap(),
        10.0 * EARTH_MASS,
        max_relative = 1e-12
    );
}

#[test]
fn test_generate_is_deterministic() {
    assert_eq!(generate_for("genesis"), generate_for("genesis"));
}

#[test]
fn test_generate_diverges_across_seeds() {
    assert_ne!(
        generate_for("alpha").get("hubble_expansion_rate"),
        generate_for("beta").get("hubble_expansion_rate")
    );
}

#[test]
fn test_generate_fills_every_constant() {
    let table = generate_for("genesis");
    let expected: usize = stages().iter().map(|s| s.constants.len()).sum();
    assert_eq!(table.len(), expected);
    assert!(table.get("hubble_expansion_rate").is_some());
    assert!(table.get("quantum_foam_density").is_none());
}

#[test]
fn test_shared_parameter_gives_shared_factor() {
    // baryon_to_photon_ratio and matter_antimatter_ratio both read baryon_asymmetry
    let table = generate_for("shared");
    let f = table.get("baryon_to_photon_ratio").unwrap() / 6.1e-10;
    assert_relative_eq!(
        table.get("matter_antimatter_ratio").unwrap(),
        1e-9 * (f - 1.0),
        max_relative = 1e-9
    );
}

#[test]
fn test_factor_bounds_apply() {
    let config = TimelineConfig {
        enabled: true,
        seed_factor_sigma: 100.0,
        seed_factor_floor: 0.5,
        seed_factor_ceiling: 2.0,
    };
    for seed in ["wild", "wilder", "wildest", "s2"] {
        let mut stream = SeededStream::from_key(&format!("{seed}_cosmic-timeline"));
        let table = generate(&mut stream, &config);

        let f = table.get("hubble_expansion_rate").unwrap() / 67.4;
        assert!((0.5..=2.0 + 1e-12).contains(&f), "factor {f} out of bounds");
        assert!(table.get("disk_mass").unwrap() > 0.0);
        let mass = table.get("terrestrial_planet_mass").unwrap();
        assert!(mass.is_finite() && mass <= EARTH_MASS * 10.0 * (1.0 + 1e-12));
    }
}

#[test]
fn test_max_ceiling_keeps_every_constant_finite() {
    let config = TimelineConfig {
        seed_factor_sigma: 500.0,
        seed_factor_ceiling: TimelineConfig::MAX_SEED_FACTOR_CEILING,
        ..TimelineConfig::default()
    };
    for i in 0..50 {
        let mut stream = SeededStream::from_key(&format!("s{i}_cosmic-timeline"));
        for (name, value) in generate(&mut stream, &config).iter() {
            assert!(value.is_finite(), "seed s{i}: {name} = {value}");
        }
    }
}

#[test]
fn test_zero_sigma_reproduces_reference_values() {
    let config = TimelineConfig {
        enabled: true,
        seed_factor_sigma: 0.0,
        ..TimelineConfig::default()
    };
    let mut stream = SeededStream::from_key("flat_cosmic-timeline");
    let table = generate(&mut stream, &config);

    assert_relative_eq!(table.get("metallicity").unwrap(), 0.02);
    assert_relative_eq!(table.get("atmospheric_pressure").unwrap(), 101_325.0);
}

#[test]
fn test_stage_lookup() {
    let s = stage("galaxy-position").unwrap();
    assert_eq!(s.name, "Galaxy Position Determination");
    assert!(stage("heat-death").is_none());
}

#[test]
fn test_stage_at_time() {
    assert_eq!(stage_at_time(0.0).map(|s| s.id), Some("planck-epoch"));
    assert_eq!(stage_at_time(100.0).map(|s| s.id), Some("nucleosynthesis"));
    assert_eq!(
        stage_at_time(450e6 * YEAR).map(|s| s.id),
        Some("population-iii-stars")
    );
    // Between nucleosynthesis and the dark matter web
    assert!(stage_at_time(1000.0).is_none());
    assert!(stage_at_time(-1.0).is_none());
}

#[test]
fn test_progress_through_stage() {
    let s = stage("nucleosynthesis").unwrap();
    assert_eq!(s.progress(0.0), 0.0);
    assert_eq!(s.progress(1000.0), 1.0);
    assert_relative_eq!(s.progress(90.5), 0.5);
}

#[test]
fn test_time_scale_labels() {
    assert_eq!(stage("planck-epoch").unwrap().time_scale_label(), "1.0e11 Planck times");
    assert_eq!(stage("quark-gluon-plasma").unwrap().time_scale_label(), "1.000 seconds");
    assert_eq!(stage("nucleosynthesis").unwrap().time_scale_label(), "3.0 minutes");
    assert_eq!(stage("recombination").unwrap().time_scale_label(), "400 thousand years");
    assert_eq!(stage("first-supernovae").unwrap().time_scale_label(), "600 million years");
    assert!(
        stage("surface-and-life")
            .unwrap()
            .time_scale_label()
            .ends_with("billion years")
    );
}
