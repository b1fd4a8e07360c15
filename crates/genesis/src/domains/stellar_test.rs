use approx::assert_relative_eq;
use sampling::SeededStream;
use units::constants::{AU, SOLAR_LUMINOSITY, SOLAR_MASS, SOLAR_RADIUS};

use crate::domains::DomainContext;
use crate::domains::stellar::{
    disk_temperature_gradient, effective_temperature, generate, main_sequence_luminosity,
    main_sequence_radius,
};
use crate::timeline::OverrideTable;

#[test]
fn test_sun_like_effective_temperature() {
    let t = effective_temperature(SOLAR_LUMINOSITY, SOLAR_RADIUS);
    assert_relative_eq!(t, 5772.0, max_relative = 1e-3);
}

#[test]
fn test_mass_luminosity_relation() {
    assert_relative_eq!(main_sequence_luminosity(1.0), SOLAR_LUMINOSITY);
    assert_relative_eq!(
        main_sequence_luminosity(2.0),
        SOLAR_LUMINOSITY * 2f64.powf(3.5),
        max_relative = 1e-12
    );
    assert_relative_eq!(main_sequence_radius(1.0), SOLAR_RADIUS);
}

#[test]
fn test_gradient_is_negative() {
    let gradient = disk_temperature_gradient(2.7 * AU);
    assert!(gradient < 0.0);
    assert_relative_eq!(gradient, -(3.0 / 7.0) * 170.0 / (2.7 * AU));
}

#[test]
fn test_star_is_hundred_disk_masses() {
    let mut stream = SeededStream::from_key("stellar");
    let overrides = OverrideTable::new();
    let star = generate(&mut DomainContext::new(&mut stream, &overrides, 0.0, 3.0));

    assert_relative_eq!(star.disk_mass.to_solar_masses(), 0.01, max_relative = 1e-12);
    assert_relative_eq!(star.stellar_mass.to_kg(), SOLAR_MASS, max_relative = 1e-12);
    assert_relative_eq!(star.stellar_luminosity, SOLAR_LUMINOSITY, max_relative = 1e-9);
    assert_relative_eq!(star.frost_line_radius.to_au(), 2.7, max_relative = 1e-9);
}

#[test]
fn test_disk_override_scales_star() {
    let mut stream = SeededStream::from_key("stellar");
    let mut overrides = OverrideTable::new();
    overrides.insert("disk_mass", 0.008 * SOLAR_MASS);
    let star = generate(&mut DomainContext::new(&mut stream, &overrides, 0.0, 3.0));

    assert_relative_eq!(star.stellar_mass.to_solar_masses(), 0.8, max_relative = 1e-12);
    assert!(star.stellar_temperature < 5772.0);
}

#[test]
fn test_noisy_star_stays_near_sun() {
    let mut stream = SeededStream::from_key("noisy");
    let overrides = OverrideTable::new();
    let star = generate(&mut DomainContext::new(&mut stream, &overrides, 0.02, 3.0));

    // Disk and star each move at most 6%
    let m = star.stellar_mass.to_solar_masses();
    assert!((0.88..=1.13).contains(&m), "{m}");
    assert!(star.stellar_temperature > 0.0);
}
