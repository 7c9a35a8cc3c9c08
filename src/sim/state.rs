//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pool::TargetPool;
use super::ray::AimRay;
use super::rng::SimRng;
use super::spawn::SpawnRegion;
use crate::consts::*;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Targets are flying and the laser is live
    Gameplay,
    /// Run ended, final score on screen, click to restart
    Result,
}

/// Things that happened during a tick, for audio/HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TargetSpawned { friendly: bool },
    /// Target left the play area without being hit
    TargetEscaped { friendly: bool },
    EnemyHit,
    FriendHit,
    GameOver { score: u32 },
    Restarted,
}

/// Axis-aligned rectangle (top-left corner + size, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Closed containment: points on the border are inside
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        !self.is_empty() && p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// A falling target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Friends cost a life when hit, enemies score a point
    pub friendly: bool,
    pub vel: Vec2,
    pub accel: Vec2,
}

impl Target {
    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    /// Explicit Euler step: velocity first, then position
    pub fn integrate(&mut self, dt: f32) {
        self.vel += self.accel * dt;
        self.pos += self.vel * dt;
    }

    /// Past the floor and still falling (both strict)
    pub fn has_fallen_below(&self, floor: f32) -> bool {
        self.pos.y > floor && self.vel.y > 0.0
    }

    /// Entirely beyond the left or right edge
    pub fn is_outside_sides(&self, width: f32) -> bool {
        self.pos.x > width || self.pos.x + self.size.x < 0.0
    }
}

/// Run parameters, fixed for the lifetime of a `GameState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub play_width: f32,
    pub play_height: f32,
    pub seed: u64,
    pub max_targets: usize,
    pub default_life: i32,
    pub spawn_region: SpawnRegion,
    /// Also despawn targets that drift off the left/right edge
    pub despawn_sideways: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            play_width: DEFAULT_PLAY_WIDTH,
            play_height: DEFAULT_PLAY_HEIGHT,
            seed: DEFAULT_SEED,
            max_targets: MAX_TARGETS,
            default_life: DEFAULT_LIFE,
            spawn_region: SpawnRegion::SideThirds,
            despawn_sideways: true,
        }
    }
}

impl GameConfig {
    /// Where the laser is fired from: bottom-center of the play area
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.play_width / 2.0, self.play_height)
    }
}

/// Complete game state, owned by the driver and passed to `tick`
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Can dip below zero within the tick that ends the run
    pub life: i32,
    pub score: u32,
    /// Trigger state for this tick and the previous one (edge detection)
    pub trigger_held: bool,
    pub trigger_was_held: bool,
    /// Last known pointer position
    pub pointer: Vec2,
    pub ray: AimRay,
    pub targets: TargetPool,
    pub rng: SimRng,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        assert!(
            config.play_width > 0.0 && config.play_height > 0.0,
            "play area must have positive dimensions"
        );
        assert!(config.max_targets > 0, "target pool needs a non-zero capacity");

        let pointer = Vec2::ZERO;
        let ray = AimRay::new(config.anchor(), pointer);
        let mut state = Self {
            phase: GamePhase::Gameplay,
            life: config.default_life,
            score: 0,
            trigger_held: false,
            trigger_was_held: false,
            pointer,
            ray,
            targets: TargetPool::with_capacity(config.max_targets),
            rng: SimRng::new(config.seed),
            events: Vec::new(),
            time_ticks: 0,
            config,
        };
        state.reset_gameplay();
        state
    }

    /// Start (or restart) a run. Input latches, the aim and the RNG stream
    /// are left alone.
    pub fn reset_gameplay(&mut self) {
        self.life = self.config.default_life;
        self.score = 0;
        self.targets.clear();
        self.phase = GamePhase::Gameplay;
    }

    /// Trigger went from released to held this tick
    pub fn is_trigger_rising(&self) -> bool {
        self.trigger_held && !self.trigger_was_held
    }

    pub fn anchor(&self) -> Vec2 {
        self.ray.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_at(x: f32, y: f32, vy: f32) -> Target {
        Target {
            pos: Vec2::new(x, y),
            size: Vec2::splat(TARGET_SIZE),
            friendly: false,
            vel: Vec2::new(0.0, vy),
            accel: Vec2::new(0.0, GRAVITY),
        }
    }

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Gameplay);
        assert_eq!(state.life, DEFAULT_LIFE);
        assert_eq!(state.score, 0);
        assert!(state.targets.is_empty());
        assert_eq!(state.targets.capacity(), MAX_TARGETS);
        assert_eq!(state.anchor(), Vec2::new(250.0, 500.0));
    }

    #[test]
    fn test_reset_keeps_aim_and_latches() {
        let mut state = GameState::new(GameConfig::default());
        state.life = 0;
        state.score = 12;
        state.phase = GamePhase::Result;
        state.trigger_held = true;
        state.pointer = Vec2::new(10.0, 20.0);
        state.ray.aim_at(state.pointer);
        let ray = state.ray;

        state.reset_gameplay();
        assert_eq!(state.life, DEFAULT_LIFE);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Gameplay);
        assert!(state.trigger_held);
        assert_eq!(state.ray, ray);
    }

    #[test]
    fn test_integrate_is_velocity_then_position() {
        let mut t = target_at(0.0, 0.0, 0.0);
        t.integrate(0.5);
        // vel = 450, pos = 450 * 0.5
        assert_eq!(t.vel.y, 450.0);
        assert_eq!(t.pos.y, 225.0);
    }

    #[test]
    fn test_fallen_below_is_strict() {
        assert!(!target_at(0.0, 500.0, 0.0).has_fallen_below(500.0));
        assert!(!target_at(0.0, 500.0, 10.0).has_fallen_below(500.0));
        assert!(!target_at(0.0, 501.0, -10.0).has_fallen_below(500.0));
        assert!(target_at(0.0, 500.5, 0.1).has_fallen_below(500.0));
    }

    #[test]
    fn test_outside_sides() {
        assert!(!target_at(450.0, 0.0, 0.0).is_outside_sides(500.0));
        assert!(!target_at(500.0, 0.0, 0.0).is_outside_sides(500.0));
        assert!(target_at(500.1, 0.0, 0.0).is_outside_sides(500.0));
        assert!(!target_at(-50.0, 0.0, 0.0).is_outside_sides(500.0));
        assert!(target_at(-50.1, 0.0, 0.0).is_outside_sides(500.0));
    }

    #[test]
    fn test_rect_contains_border() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 15.0)));
        assert!(!r.contains(Vec2::new(15.1, 12.0)));
        assert!(!Rect::new(0.0, 0.0, 0.0, 5.0).contains(Vec2::ZERO));
    }

    #[test]
    #[should_panic]
    fn test_rejects_empty_play_area() {
        GameState::new(GameConfig {
            play_width: 0.0,
            ..GameConfig::default()
        });
    }
}
