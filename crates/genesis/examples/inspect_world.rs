//! Print every constant of one world as JSON, followed by its warnings
//!
//! Usage: cargo run -p genesis --example inspect_world -- [seed] [config.json]
//!
//! Set `RUST_LOG=genesis=trace` to watch streams and profiles being created.

use std::process::ExitCode;

use genesis::{Genesis, GenesisConfig};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,genesis=debug"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn run(seed: String, config_path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => GenesisConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GenesisConfig::default(),
    };

    let mut world = Genesis::with_config(seed, config)?;
    println!("Seed: {:?}", world.seed());
    println!("Timeline overrides: {}\n", world.overrides().len());

    let constants = world.all_constants()?;
    println!("{}", serde_json::to_string_pretty(&constants)?);

    println!(
        "\nHabitable zone: {:.2} - {:.2} AU, planet at {:.2} AU",
        constants.derived.habitable_zone_inner.to_au(),
        constants.derived.habitable_zone_outer.to_au(),
        constants.planetary.orbital_radius.to_au()
    );
    println!(
        "Surface: {:.1} K, {:.2} atm, {} atmosphere",
        constants.derived.surface_temperature,
        constants.atmospheric.atmospheric_pressure.to_atmospheres(),
        constants.atmospheric.regime
    );

    let warnings = world.warnings()?;
    if warnings.is_empty() {
        println!("No validation warnings");
    }
    for w in &warnings {
        println!("[{:?}] {}", w.severity, w.message);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let mut args = std::env::args().skip(1);
    let seed = args.next().unwrap_or_else(|| "genesis".to_string());
    let config_path = args.next();

    match run(seed, config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
