//! Read-only frame snapshot for the rendering side
//!
//! The simulation never draws. After each frame the driver captures a
//! `FrameView` and hands it to whatever presents the game.

use serde::Serialize;

use crate::sim::{GamePhase, GameState, Target};

/// RGBA color, 0-255 per channel
pub type Rgba = [u8; 4];

pub const LINE_DEFAULT_COLOR: Rgba = [255, 255, 255, 255];
pub const LINE_ATTACK_COLOR: Rgba = [255, 50, 50, 255];
pub const TARGET_FRIEND_COLOR: Rgba = [50, 50, 255, 255];
pub const TARGET_ENEMY_COLOR: Rgba = [255, 50, 50, 255];
pub const TEXT_COLOR: Rgba = [255, 255, 255, 255];

/// One target as the renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub friendly: bool,
}

impl TargetView {
    pub fn color(&self) -> Rgba {
        if self.friendly {
            TARGET_FRIEND_COLOR
        } else {
            TARGET_ENEMY_COLOR
        }
    }
}

impl From<&Target> for TargetView {
    fn from(t: &Target) -> Self {
        Self {
            x: t.pos.x,
            y: t.pos.y,
            w: t.size.x,
            h: t.size.y,
            friendly: t.friendly,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub life: i32,
    pub score: u32,
    /// Pool order, which is also draw order
    pub targets: Vec<TargetView>,
    pub ray_start: [f32; 2],
    pub ray_end: [f32; 2],
    /// Trigger held: draw the laser in its attack color
    pub hot: bool,
    pub play_width: f32,
    pub play_height: f32,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            life: state.life.max(0),
            score: state.score,
            targets: state.targets.iter().map(TargetView::from).collect(),
            ray_start: state.ray.anchor.to_array(),
            ray_end: state.ray.end.to_array(),
            hot: state.trigger_held,
            play_width: state.config.play_width,
            play_height: state.config.play_height,
        }
    }

    pub fn line_color(&self) -> Rgba {
        if self.hot {
            LINE_ATTACK_COLOR
        } else {
            LINE_DEFAULT_COLOR
        }
    }

    /// Whether the final score overlay replaces the playfield
    pub fn shows_result(&self) -> bool {
        self.phase == GamePhase::Result
    }

    pub fn life_label(&self) -> String {
        format!("LIFE : {}", self.life)
    }

    pub fn score_label(&self) -> String {
        format!("SCORE : {}", self.score)
    }

    pub fn final_score_label(&self) -> String {
        format!("Final Score : {}", self.score)
    }
}
