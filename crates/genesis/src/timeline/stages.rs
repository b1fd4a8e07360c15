//! The fifteen stages of cosmic history, from the Planck epoch to first life

use serde::Serialize;
use units::constants::YEAR;

/// Age of the solar system's collapse trigger (s after the Big Bang)
const COLLAPSE: f64 = 4.567e9 * YEAR;

/// One constant produced by a stage, averaged over its seed parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstantDef {
    pub name: &'static str,
    /// Human-readable formula, for display only
    pub formula: &'static str,
    pub seed_parameters: &'static [&'static str],
}

/// A period of cosmic history that contributes overrides
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stage {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Seconds after the Big Bang
    pub time_start: f64,
    /// Seconds after the Big Bang
    pub time_end: f64,
    pub causal_trigger: &'static str,
    /// Seed factors drawn for this stage, in draw order
    pub seed_influence: &'static [&'static str],
    pub constants: &'static [ConstantDef],
}

const fn constant(
    name: &'static str,
    formula: &'static str,
    seed_parameters: &'static [&'static str],
) -> ConstantDef {
    ConstantDef {
        name,
        formula,
        seed_parameters,
    }
}

/// All stages, ordered by start time
pub static STAGES: [Stage; 15] = [
    Stage {
        id: "planck-epoch",
        name: "Planck Epoch",
        description: "Spacetime foam with all four forces unified.",
        time_start: 0.0,
        time_end: 1e-32,
        causal_trigger: "Vacuum quantum fluctuation",
        seed_influence: &["quantum_foam_density", "initial_entropy", "vacuum_energy_density"],
        constants: &[
            constant("time_dilation_constant", "1 + 0.01·(f − 1)", &["quantum_foam_density"]),
            constant("entropy_baseline", "k_B·ln(10^120)·f", &["initial_entropy"]),
            constant("vacuum_energy", "E_planck·f", &["vacuum_energy_density"]),
        ],
    },
    Stage {
        id: "cosmic-inflation",
        name: "Cosmic Inflation",
        description: "Inflaton-driven exponential expansion by a factor of ~10^26.",
        time_start: 1e-32,
        time_end: 1e-6,
        causal_trigger: "Symmetry breaking of the unified force",
        seed_influence: &["inflation_rate", "curvature_perturbations", "scalar_field_amplitude"],
        constants: &[
            constant("hubble_expansion_rate", "67.4 km/s/Mpc·f", &["inflation_rate"]),
            constant("cosmic_curvature", "0.01·(f − 1)", &["curvature_perturbations"]),
            constant("density_fluctuation_amplitude", "2×10^-5·f", &["scalar_field_amplitude"]),
        ],
    },
    Stage {
        id: "quark-gluon-plasma",
        name: "Quark-Gluon Plasma",
        description: "Free quarks and gluons at ~10^12 K.",
        time_start: 1e-6,
        time_end: 1.0,
        causal_trigger: "Cooling below the QCD transition",
        seed_influence: &["baryon_asymmetry", "color_charge_density", "thermal_fluctuations"],
        constants: &[
            constant("baryon_to_photon_ratio", "6.1×10^-10·f", &["baryon_asymmetry"]),
            constant("matter_antimatter_ratio", "10^-9·(f − 1)", &["baryon_asymmetry"]),
            constant("qcd_coupling_constant", "0.118·f", &["color_charge_density"]),
        ],
    },
    Stage {
        id: "nucleosynthesis",
        name: "Big Bang Nucleosynthesis",
        description: "Hydrogen, helium and lithium nuclei form.",
        time_start: 1.0,
        time_end: 180.0,
        causal_trigger: "Cooling to ~10^9 K allows nuclear binding",
        seed_influence: &["neutron_proton_ratio", "reaction_rates", "primordial_abundances"],
        constants: &[
            constant("hydrogen_fraction", "0.75·(1 + 0.01·(f − 1))", &["primordial_abundances"]),
            constant("helium_fraction", "0.25·(1 + 0.01·(f − 1))", &["primordial_abundances"]),
            constant("lithium_fraction", "10^-10·f", &["primordial_abundances"]),
            constant("deuterium_fraction", "2.5×10^-5·f", &["primordial_abundances"]),
        ],
    },
    Stage {
        id: "recombination",
        name: "Recombination Era",
        description: "Neutral atoms form and the universe turns transparent.",
        time_start: 380_000.0 * YEAR,
        time_end: 400_000.0 * YEAR,
        causal_trigger: "Cooling to ~3000 K",
        seed_influence: &["ionization_history", "acoustic_peaks", "cmb_temperature_seed"],
        constants: &[
            constant("cmb_temperature", "2.725 K·(1 + 0.001·(f − 1))", &["cmb_temperature_seed"]),
            constant("sound_horizon", "147 Mpc·f", &["acoustic_peaks"]),
            constant("photon_mean_free_path", "10^26 m·f", &["ionization_history"]),
        ],
    },
    Stage {
        id: "dark-matter-web",
        name: "Dark Matter Web Formation",
        description: "Dark matter collapses into the filamentary cosmic web.",
        time_start: 200e6 * YEAR,
        time_end: 400e6 * YEAR,
        causal_trigger: "Gravitational growth of density perturbations",
        seed_influence: &["web_topology", "halo_mass_function", "filament_density"],
        constants: &[
            constant("dark_matter_density", "0.268·(1 + 0.01·(f − 1))", &["halo_mass_function"]),
            constant("structure_formation_scale", "10^21 m·f", &["filament_density"]),
            constant("cosmic_web_connectivity", "3.5·f", &["web_topology"]),
        ],
    },
    Stage {
        id: "population-iii-stars",
        name: "Population III Stars",
        description: "First metal-free stars ignite in dark matter halos.",
        time_start: 400e6 * YEAR,
        time_end: 500e6 * YEAR,
        causal_trigger: "Halos reach ~10^6 M☉",
        seed_influence: &["imf_slope", "star_formation_efficiency", "mass_range"],
        constants: &[
            constant("pop3_imf_slope", "−2.35 + 0.2·(f − 1)", &["imf_slope"]),
            constant("star_formation_efficiency", "0.01·f", &["star_formation_efficiency"]),
            constant("min_stellar_mass", "100 M☉·f", &["mass_range"]),
        ],
    },
    Stage {
        id: "first-supernovae",
        name: "First Supernovae",
        description: "Pair-instability supernovae seed the first heavy elements.",
        time_start: 500e6 * YEAR,
        time_end: 600e6 * YEAR,
        causal_trigger: "Massive stars exhaust their fuel",
        seed_influence: &["explosion_energy", "metal_yields", "element_ratios"],
        constants: &[
            constant("supernova_energy", "10^44 J·f", &["explosion_energy"]),
            constant("iron_peak_yield", "0.1 M☉·f", &["metal_yields"]),
            constant("alpha_element_ratio", "log10(f)", &["element_ratios"]),
        ],
    },
    Stage {
        id: "galaxy-position",
        name: "Galaxy Position Determination",
        description: "Galactic position sets the metal enrichment history.",
        time_start: 1e9 * YEAR,
        time_end: 1.5e9 * YEAR,
        causal_trigger: "Expansion history and dark matter web",
        seed_influence: &["galactic_radius", "metallicity_gradient", "rotation_curve"],
        constants: &[
            constant("distance_from_core", "8000 ly·f", &["galactic_radius"]),
            constant("metallicity", "0.02·f", &["metallicity_gradient"]),
            constant("orbital_velocity", "220 km/s·f", &["rotation_curve"]),
        ],
    },
    Stage {
        id: "molecular-cloud",
        name: "Molecular Cloud Formation",
        description: "Enriched gas cools into dense molecular clouds.",
        time_start: 4e9 * YEAR,
        time_end: 4.5e9 * YEAR,
        causal_trigger: "Enrichment cycles and thermal instability",
        seed_influence: &["cloud_mass", "dust_to_gas_ratio", "chemical_abundances"],
        constants: &[
            constant("molecular_cloud_mass", "10^5 M☉·f", &["cloud_mass"]),
            constant("dust_fraction", "0.01·f", &["dust_to_gas_ratio"]),
            constant("carbon_oxygen_ratio", "0.5·f", &["chemical_abundances"]),
        ],
    },
    Stage {
        id: "cloud-collapse",
        name: "Cloud Collapse Trigger",
        description: "A nearby supernova shock triggers gravitational collapse.",
        time_start: COLLAPSE - 50_000.0 * YEAR,
        time_end: COLLAPSE,
        causal_trigger: "External shockwave and self-gravity",
        seed_influence: &["angular_momentum", "initial_spin", "collapse_timescale"],
        constants: &[
            constant("specific_angular_momentum", "10^15 m²/s·f", &["angular_momentum"]),
            constant("rotation_period", "1 day·f", &["initial_spin"]),
            constant("free_fall_time", "10^13 s·f", &["collapse_timescale"]),
        ],
    },
    Stage {
        id: "protoplanetary-disk",
        name: "Protoplanetary Disk",
        description: "The collapsing cloud flattens into a rotating disk.",
        time_start: COLLAPSE,
        time_end: COLLAPSE + 50_000.0 * YEAR,
        causal_trigger: "Angular momentum conservation during collapse",
        seed_influence: &["disk_mass", "frost_line_position", "temperature_profile"],
        constants: &[
            constant("disk_mass", "0.01 M☉·f", &["disk_mass"]),
            constant("frost_line_radius", "2.7 AU·f", &["frost_line_position"]),
            constant("temperature_at_1AU", "280 K·f", &["temperature_profile"]),
        ],
    },
    Stage {
        id: "planetary-accretion",
        name: "Planetary Accretion",
        description: "Planetesimals collide and grow into planets.",
        time_start: COLLAPSE + 50_000.0 * YEAR,
        time_end: COLLAPSE + 100e6 * YEAR,
        causal_trigger: "Collisions and gravitational focusing",
        seed_influence: &["planet_masses", "orbital_elements", "migration_history"],
        constants: &[
            constant("terrestrial_planet_mass", "M⊕·10^(f − 1)", &["planet_masses"]),
            constant("semi_major_axis", "1 AU·f", &["orbital_elements"]),
            constant("eccentricity", "0.1·f", &["orbital_elements"]),
        ],
    },
    Stage {
        id: "planetary-differentiation",
        name: "Planetary Differentiation",
        description: "Iron sinks to the core and silicates float to the mantle.",
        time_start: COLLAPSE + 100e6 * YEAR,
        time_end: COLLAPSE + 200e6 * YEAR,
        causal_trigger: "Gravitational heating and radioactive decay",
        seed_influence: &["core_mass_fraction", "magnetic_field_strength", "heat_production"],
        constants: &[
            constant("core_fraction", "0.33·(1 + 0.1·(f − 1))", &["core_mass_fraction"]),
            constant("magnetic_field", "50 µT·f", &["magnetic_field_strength"]),
            constant("heat_flow", "0.1 W/m²·f", &["heat_production"]),
        ],
    },
    Stage {
        id: "surface-and-life",
        name: "Surface Formation & First Life",
        description: "Late bombardment delivers volatiles; oceans and prebiotic chemistry appear.",
        time_start: COLLAPSE + 200e6 * YEAR,
        time_end: COLLAPSE + 800e6 * YEAR,
        causal_trigger: "Late heavy bombardment and atmospheric evolution",
        seed_influence: &["water_delivery", "atmospheric_composition", "prebiotic_molecules"],
        constants: &[
            constant("ocean_mass_fraction", "0.0003·f", &["water_delivery"]),
            constant("atmospheric_pressure", "101325 Pa·f", &["atmospheric_composition"]),
            constant("organic_carbon_concentration", "10^-6·f", &["prebiotic_molecules"]),
            constant("ph_value", "7 + 2·(f − 1)", &["atmospheric_composition"]),
        ],
    },
];
