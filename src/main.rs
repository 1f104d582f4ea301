//! # Terravox Entry Point
//!
//! Runs the engine's headless demo loop: loads settings, initializes
//! logging, and simulates a viewer moving through a generated world.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

use log::info;

use terravox::EngineSettings;

/// Path the engine reads its optional settings file from.
const SETTINGS_PATH: &str = "terravox.json";

fn main() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let settings = EngineSettings::load_or_default(SETTINGS_PATH);
    terravox::run_demo(&settings);
}
