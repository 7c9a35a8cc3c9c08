//! Target spawning
//!
//! Each tick rolls 1 in `spawn_odds(score)`; a hit launches one target
//! upward from the floor. A roll that lands while the pool is full is
//! simply lost, there is no backlog.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::SimRng;
use super::state::{GameConfig, GameEvent, GameState, Target};
use crate::consts::*;

/// Where along the floor new targets may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpawnRegion {
    /// Left or right outer band (a quarter of the width each), never dead center
    #[default]
    SideThirds,
    /// Anywhere the target fits
    FullWidth,
}

impl SpawnRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnRegion::SideThirds => "side_thirds",
            SpawnRegion::FullWidth => "full_width",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "side_thirds" | "sides" | "thirds" => Some(SpawnRegion::SideThirds),
            "full_width" | "full" => Some(SpawnRegion::FullWidth),
            _ => None,
        }
    }

    /// Draw the initial left edge for a target of width `w`
    fn draw_x(&self, rng: &mut SimRng, play_width: f32, w: f32) -> f32 {
        match self {
            SpawnRegion::SideThirds => {
                let band = ((play_width / 2.0) as u32 / 2).max(1);
                let x = rng.next_bounded(band) as f32;
                if rng.coin() { play_width - w - x } else { x }
            }
            SpawnRegion::FullWidth => {
                let span = ((play_width - w) as u32).max(1);
                rng.next_bounded(span) as f32
            }
        }
    }
}

/// 1-in-N spawn odds for the current score: 60 at score 0, bottoming out at 5
pub fn spawn_odds(score: u32) -> u32 {
    (SPAWN_ODDS_BASE - score as i64).clamp(SPAWN_ODDS_MIN, SPAWN_ODDS_MAX) as u32
}

/// Build a freshly launched target sitting flush with the floor
pub fn new_target(rng: &mut SimRng, config: &GameConfig) -> Target {
    let size = Vec2::splat(TARGET_SIZE);
    let x = config
        .spawn_region
        .draw_x(rng, config.play_width, size.x);
    let y = config.play_height - size.y;

    let vx = rng.next_bounded(LAUNCH_SPEED_X_RANGE) as f32 - (LAUNCH_SPEED_X_RANGE / 2) as f32;
    let vy = -(LAUNCH_SPEED_Y_MIN + rng.next_bounded(LAUNCH_SPEED_Y_RANGE) as f32);
    let friendly = rng.coin();

    Target {
        pos: Vec2::new(x, y),
        size,
        friendly,
        vel: Vec2::new(vx, vy),
        accel: Vec2::new(0.0, GRAVITY),
    }
}

/// Roll for a spawn this tick. Returns true if a target was added.
pub fn try_spawn(state: &mut GameState) -> bool {
    let odds = spawn_odds(state.score);
    if state.rng.next_bounded(odds) != 0 {
        return false;
    }

    if state.targets.is_full() {
        log::debug!("Spawn dropped, pool full ({})", state.targets.capacity());
        return false;
    }

    let target = new_target(&mut state.rng, &state.config);
    log::debug!(
        "Spawned {} at x={:.0} vel=({:.0}, {:.0})",
        if target.friendly { "friend" } else { "enemy" },
        target.pos.x,
        target.vel.x,
        target.vel.y
    );
    let friendly = target.friendly;
    if !state.targets.try_push(target) {
        return false;
    }
    state.events.push(GameEvent::TargetSpawned { friendly });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_odds_clamps() {
        assert_eq!(spawn_odds(0), 60);
        assert_eq!(spawn_odds(1), 59);
        assert_eq!(spawn_odds(55), 5);
        assert_eq!(spawn_odds(56), 5);
        assert_eq!(spawn_odds(u32::MAX), 5);
    }

    #[test]
    fn test_spawn_odds_monotonic() {
        for score in 0..100 {
            assert!(spawn_odds(score + 1) <= spawn_odds(score));
        }
    }

    #[test]
    fn test_side_thirds_avoid_center() {
        let config = GameConfig::default();
        let mut rng = SimRng::new(3);
        for _ in 0..500 {
            let t = new_target(&mut rng, &config);
            let left_band = t.pos.x >= 0.0 && t.pos.x < 125.0;
            let right_band = t.pos.x > 325.0 && t.pos.x + t.size.x <= 500.0;
            assert!(left_band || right_band, "x = {}", t.pos.x);
        }
    }

    #[test]
    fn test_full_width_stays_on_screen() {
        let config = GameConfig {
            spawn_region: SpawnRegion::FullWidth,
            ..GameConfig::default()
        };
        let mut rng = SimRng::new(11);
        for _ in 0..500 {
            let t = new_target(&mut rng, &config);
            assert!(t.pos.x >= 0.0 && t.pos.x + t.size.x <= config.play_width);
        }
    }

    #[test]
    fn test_new_target_kinematics() {
        let config = GameConfig::default();
        let mut rng = SimRng::new(5);
        for _ in 0..500 {
            let t = new_target(&mut rng, &config);
            assert_eq!(t.size, Vec2::splat(TARGET_SIZE));
            assert_eq!(t.pos.y, config.play_height - TARGET_SIZE);
            assert!(t.vel.x >= -300.0 && t.vel.x < 300.0);
            assert!(t.vel.y <= -600.0 && t.vel.y > -900.0);
            assert_eq!(t.accel, Vec2::new(0.0, GRAVITY));
        }
    }

    #[test]
    fn test_region_parse() {
        assert_eq!(SpawnRegion::from_str("Full"), Some(SpawnRegion::FullWidth));
        assert_eq!(SpawnRegion::from_str("thirds"), Some(SpawnRegion::SideThirds));
        assert_eq!(SpawnRegion::from_str("middle"), None);
        assert_eq!(
            SpawnRegion::from_str(SpawnRegion::FullWidth.as_str()),
            Some(SpawnRegion::FullWidth)
        );
    }

    #[test]
    fn test_full_pool_drops_without_backlog() {
        let mut config = GameConfig::default();
        config.max_targets = 1;
        let mut state = GameState::new(config);

        let mut spawned = 0;
        for _ in 0..2000 {
            if try_spawn(&mut state) {
                spawned += 1;
            }
        }
        assert_eq!(spawned, 1);
        assert_eq!(state.targets.len(), 1);
    }

    #[test]
    fn test_spawn_event_only_for_stored_targets() {
        let mut config = GameConfig::default();
        config.max_targets = 3;
        let mut state = GameState::new(config);

        for _ in 0..3000 {
            let before = state.targets.len();
            state.events.clear();
            let added = try_spawn(&mut state);
            let announced = state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::TargetSpawned { .. }))
                .count();
            assert_eq!(added, state.targets.len() == before + 1);
            assert_eq!(announced, usize::from(added));
        }
        assert!(state.targets.is_full());
    }
}
