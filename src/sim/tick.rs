//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.
//!
//! Gameplay stage order is spawn, integrate, despawn, hit-test, phase check.
//! Spawn appends to the end of the pool and the despawn and hit passes walk
//! from the highest index down, so a target spawned this tick is already
//! visible to both passes in the same tick.

use glam::Vec2;

use super::spawn::try_spawn;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// New pointer position, if the pointer moved since the last tick
    pub pointer: Option<Vec2>,
    /// Fire button held (mouse / touch / key)
    pub trigger_held: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;
    state.trigger_held = input.trigger_held;

    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
        // The laser is frozen while the result screen is up
        if state.phase == GamePhase::Gameplay {
            state.ray.aim_at(pointer);
        }
    }

    match state.phase {
        GamePhase::Gameplay => {
            try_spawn(state);
            integrate_targets(state, dt);
            despawn_targets(state);
            if state.trigger_held {
                resolve_hits(state);
            }
            check_phase(state);
        }

        GamePhase::Result => {
            if state.is_trigger_rising() {
                state.reset_gameplay();
                state.events.push(GameEvent::Restarted);
                log::info!("Run restarted");
            }
        }
    }

    state.trigger_was_held = state.trigger_held;
    log::trace!(
        "tick {} phase={:?} life={} score={} targets={}",
        state.time_ticks,
        state.phase,
        state.life,
        state.score,
        state.targets.len()
    );
}

/// Step every live target forward by `dt`
pub fn integrate_targets(state: &mut GameState, dt: f32) {
    for target in state.targets.iter_mut() {
        target.integrate(dt);
    }
}

/// Drop targets that fell back through the floor (and, if configured, those
/// that drifted off either side)
pub fn despawn_targets(state: &mut GameState) {
    let floor = state.config.play_height;
    let width = state.config.play_width;
    let sideways = state.config.despawn_sideways;
    let events = &mut state.events;

    state.targets.remove_where_rev(
        |t| t.has_fallen_below(floor) || (sideways && t.is_outside_sides(width)),
        |t| {
            events.push(GameEvent::TargetEscaped {
                friendly: t.friendly,
            })
        },
    );
}

/// Apply every target the laser touches this tick: friends cost a life,
/// enemies score a point, and either way the target is removed
pub fn resolve_hits(state: &mut GameState) {
    let ray = state.ray;
    let mut friend_hits: i32 = 0;
    let mut enemy_hits: u32 = 0;
    let events = &mut state.events;

    state.targets.remove_where_rev(
        |t| ray.hits(&t.rect()),
        |t| {
            if t.friendly {
                friend_hits += 1;
                events.push(GameEvent::FriendHit);
            } else {
                enemy_hits += 1;
                events.push(GameEvent::EnemyHit);
            }
        },
    );

    if friend_hits > 0 || enemy_hits > 0 {
        state.life -= friend_hits;
        state.score += enemy_hits;
        log::debug!(
            "Laser hit {} enemies, {} friends (life={}, score={})",
            enemy_hits,
            friend_hits,
            state.life,
            state.score
        );
    }
}

/// End the run once life is gone
pub fn check_phase(state: &mut GameState) {
    if state.phase == GamePhase::Gameplay && state.life <= 0 {
        state.phase = GamePhase::Result;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("Game over, final score {}", state.score);
    }
}
