//! Tests for configuration loading and validation

use crate::config::{GenesisConfig, NoiseConfig, TimelineConfig};
use crate::domain::Domain;
use crate::error::Error;

#[test]
fn test_empty_json_gives_defaults() {
    let config = GenesisConfig::from_json("{}").unwrap();
    assert_eq!(config, GenesisConfig::default());
    assert!(config.timeline.enabled);
    assert_eq!(config.noise.clamp_sigmas, 3.0);
}

#[test]
fn test_partial_override() {
    let config = GenesisConfig::from_json(
        r#"{ "timeline": { "enabled": false }, "noise": { "atmospheric": 0.1 } }"#,
    )
    .unwrap();

    assert!(!config.timeline.enabled);
    assert_eq!(config.timeline.seed_factor_sigma, 0.1);
    assert_eq!(config.noise.atmospheric, 0.1);
    assert_eq!(config.noise.stellar, 0.02);
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = GenesisConfig::from_json("{ noise: ").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_negative_sigma_rejected() {
    let err = GenesisConfig::from_json(r#"{ "noise": { "chemistry": -0.1 } }"#).unwrap_err();
    match err {
        Error::InvalidConfig { field, .. } => assert_eq!(field, "noise.chemistry"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_sigma_that_could_flip_sign_rejected() {
    // 0.4 · 3 clamp = 1.2, which would allow a factor below zero
    let err = GenesisConfig::from_json(r#"{ "noise": { "planetary": 0.4 } }"#).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidConfig {
            field: "noise.planetary",
            ..
        }
    ));
}

#[test]
fn test_floor_outside_unit_interval_rejected() {
    for floor in ["0.0", "1.5"] {
        let json = format!(r#"{{ "timeline": {{ "seed_factor_floor": {floor} }} }}"#);
        let err = GenesisConfig::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig {
                field: "timeline.seed_factor_floor",
                ..
            }
        ));
    }
}

#[test]
fn test_zero_clamp_rejected() {
    let mut config = GenesisConfig::default();
    config.noise.clamp_sigmas = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_without_timeline() {
    let config = GenesisConfig::without_timeline();
    assert!(!config.timeline.enabled);
    assert_eq!(config.noise, NoiseConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_quiet_noise_is_valid_and_zero() {
    let noise = NoiseConfig::quiet();
    for domain in Domain::ALL {
        assert_eq!(noise.sigma(domain), 0.0);
        assert_eq!(noise.bound(domain), 0.0);
    }
    assert_eq!(noise.surface_temperature_kelvin, 0.0);
}

#[test]
fn test_bound_is_sigma_times_clamp() {
    let noise = NoiseConfig::default();
    assert!((noise.bound(Domain::Planetary) - 0.06).abs() < 1e-12);
}

#[test]
fn test_round_trips_through_json() {
    let config = GenesisConfig::without_timeline();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GenesisConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_large_sigma_accepted_under_ceiling() {
    let config =
        GenesisConfig::from_json(r#"{ "timeline": { "seed_factor_sigma": 500.0 } }"#).unwrap();
    assert_eq!(config.timeline.seed_factor_ceiling, 3.0);
}

#[test]
fn test_ceiling_outside_range_rejected() {
    for ceiling in ["0.5", "20.0", "1e308"] {
        let json = format!(r#"{{ "timeline": {{ "seed_factor_ceiling": {ceiling} }} }}"#);
        let err = GenesisConfig::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig {
                field: "timeline.seed_factor_ceiling",
                ..
            }
        ));
    }
}

#[test]
fn test_max_ceiling_is_valid() {
    let mut config = GenesisConfig::default();
    config.timeline.seed_factor_ceiling = TimelineConfig::MAX_SEED_FACTOR_CEILING;
    assert!(config.validate().is_ok());
}

#[test]
fn test_pinned_constants_from_json() {
    let config =
        GenesisConfig::from_json(r#"{ "pinned": { "metallicity": 0.0134 } }"#).unwrap();
    assert_eq!(config.pinned.get("metallicity"), Some(&0.0134));
}

#[test]
fn test_non_finite_pin_rejected() {
    let mut config = GenesisConfig::default();
    config.pinned.insert("metallicity".to_string(), f64::NAN);
    assert!(matches!(
        config.validate(),
        Err(Error::InvalidConfig { field: "pinned", .. })
    ));
}
