//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pool order, compacted on removal)
//! - No rendering or platform dependencies

pub mod pool;
pub mod ray;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use pool::TargetPool;
pub use ray::{AimRay, segment_intersects_rect};
pub use rng::SimRng;
pub use spawn::{SpawnRegion, new_target, spawn_odds, try_spawn};
pub use state::{GameConfig, GameEvent, GamePhase, GameState, Rect, Target};
pub use tick::{
    TickInput, check_phase, despawn_targets, integrate_targets, resolve_hits, tick,
};
