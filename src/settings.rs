//! Game settings and preferences
//!
//! Stored as JSON. Missing fields take their defaults, so a settings file
//! only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GameConfig, SpawnRegion};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play area ===
    /// Logical play-area width (the window letterboxes around it)
    pub play_width: f32,
    /// Logical play-area height
    pub play_height: f32,

    // === Simulation ===
    /// RNG seed for the run
    pub seed: u64,
    /// Target pool capacity
    pub max_targets: usize,
    /// Lives at the start of a run
    pub default_life: i32,
    /// Where targets launch from
    pub spawn_region: SpawnRegion,
    /// Remove targets that drift off the left/right edge
    pub despawn_sideways: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_width: DEFAULT_PLAY_WIDTH,
            play_height: DEFAULT_PLAY_HEIGHT,

            seed: DEFAULT_SEED,
            max_targets: MAX_TARGETS,
            default_life: DEFAULT_LIFE,
            spawn_region: SpawnRegion::SideThirds,
            despawn_sideways: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const PATH_ENV: &'static str = "LASER_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults when the file
    /// is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the file named by `LASER_SETTINGS`, or use defaults
    pub fn load_from_env() -> Self {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Simulation parameters for a new `GameState`
    pub fn to_game_config(&self) -> GameConfig {
        GameConfig {
            play_width: self.play_width,
            play_height: self.play_height,
            seed: self.seed,
            max_targets: self.max_targets,
            default_life: self.default_life,
            spawn_region: self.spawn_region,
            despawn_sideways: self.despawn_sideways,
        }
    }
}
