use approx::assert_relative_eq;

use crate::constants::{EARTH_MASS, SOLAR_MASS};
use crate::mass::Mass;

#[test]
fn test_mass_conversions() {
    let sun = Mass::from_solar_masses(1.0);
    assert_relative_eq!(sun.to_kg(), SOLAR_MASS);

    let earth = Mass::from_kg(EARTH_MASS);
    assert_relative_eq!(earth.to_earth_masses(), 1.0);

    // ~332,946 Earth masses per solar mass
    assert_relative_eq!(sun.to_earth_masses(), SOLAR_MASS / EARTH_MASS);
}

#[test]
fn test_disk_to_star_scaling() {
    // A 0.01 M☉ disk scaled by 100 is one solar mass
    let disk = Mass::from_solar_masses(0.01);
    let star = disk * 100.0;
    assert_relative_eq!(star.to_solar_masses(), 1.0, epsilon = 1e-12);
    assert_relative_eq!((100.0 * disk).to_kg(), star.to_kg());
}

#[test]
fn test_mass_ratio() {
    let planet = Mass::from_earth_masses(2.0);
    let star = Mass::from_solar_masses(1.0);
    assert_relative_eq!(planet / star, 2.0 * EARTH_MASS / SOLAR_MASS);
    assert_relative_eq!((planet + planet).to_earth_masses(), 4.0);
}
