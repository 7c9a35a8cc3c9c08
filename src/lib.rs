//! Laser - an arcade reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, hit-testing, phases)
//! - `view`: Read-only frame snapshot for whatever draws the game
//! - `audio`: Sound cues derived from simulation events
//! - `platform`: Collaborator capabilities and the fixed-step driver
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod view;

pub use settings::Settings;
pub use view::FrameView;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default play area, in logical pixels
    pub const DEFAULT_PLAY_WIDTH: f32 = 500.0;
    pub const DEFAULT_PLAY_HEIGHT: f32 = 500.0;

    /// Default target pool capacity
    pub const MAX_TARGETS: usize = 100;
    /// Lives at the start of every run
    pub const DEFAULT_LIFE: i32 = 3;

    /// Targets are square
    pub const TARGET_SIZE: f32 = 50.0;
    /// Downward acceleration applied to every target (pixels/s²)
    pub const GRAVITY: f32 = 900.0;

    /// Horizontal launch speed is drawn from [-300, 300)
    pub const LAUNCH_SPEED_X_RANGE: u32 = 600;
    /// Vertical launch speed is -(600 + [0, 300))
    pub const LAUNCH_SPEED_Y_MIN: f32 = 600.0;
    pub const LAUNCH_SPEED_Y_RANGE: u32 = 300;

    /// Spawn odds are 1 in clamp(BASE - score, MIN, MAX)
    pub const SPAWN_ODDS_BASE: i64 = 60;
    pub const SPAWN_ODDS_MIN: i64 = 5;
    pub const SPAWN_ODDS_MAX: i64 = 60;

    /// How far past the pointer the aim ray is extended
    pub const RAY_EXTENT: f32 = 10_000.0;

    /// Fixed seed so every run plays out the same for the same input
    pub const DEFAULT_SEED: u64 = 0;
}
