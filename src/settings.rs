//! # Engine Settings Module
//!
//! Runtime configuration for the engine, loaded from a JSON file so a
//! deployment can tune the streaming radius or pin the world seed
//! without rebuilding. Every field has a default; a missing or broken
//! settings file degrades to defaults with a warning.

use std::fs;
use std::io;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

/// Default streaming radius in chunks.
const DEFAULT_RENDER_RADIUS: i32 = 4;
/// Default number of simulation ticks the headless demo runs.
const DEFAULT_TICKS: u32 = 120;
/// Default viewer speed in world units per tick.
const DEFAULT_VIEWER_SPEED: f32 = 2.5;

/// Engine configuration, deserialized from JSON.
///
/// Fields absent from the file fall back to their defaults, so a
/// settings file only needs to name what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Streaming radius around the viewer, in chunks.
    pub render_radius: i32,
    /// World seed. Defaults to a random seed per run.
    pub seed: u32,
    /// Number of ticks the headless demo simulates.
    pub ticks: u32,
    /// Viewer travel speed in world units per tick.
    pub viewer_speed: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            render_radius: DEFAULT_RENDER_RADIUS,
            seed: fastrand::u32(..),
            ticks: DEFAULT_TICKS,
            viewer_speed: DEFAULT_VIEWER_SPEED,
        }
    }
}

impl EngineSettings {
    /// Loads settings from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The parsed settings, or an error if the file cannot be read or
    /// does not parse.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(io::Error::other)
    }

    /// Loads settings from a JSON file, falling back to defaults.
    ///
    /// A missing or malformed file is logged and replaced by
    /// [`EngineSettings::default`]; startup never fails on
    /// configuration.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(
                    "could not load settings from {}: {}, using defaults",
                    path.display(),
                    error
                );
                EngineSettings::default()
            }
        }
    }
}
