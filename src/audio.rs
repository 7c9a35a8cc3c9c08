//! Sound cues
//!
//! The simulation only raises `GameEvent`s. `AudioManager` turns them into
//! cues for a `SoundSink` and keeps the background music running while a
//! run is in progress: it starts with gameplay and is cut on game over.

use crate::platform::SoundSink;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Looping background track during gameplay
    MusicLoop,
    /// Laser took out an enemy
    EnemyHit,
    /// Laser hit a friend
    FriendHit,
    /// Last life lost
    GameOver,
}

impl SoundEffect {
    /// One-shot cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::EnemyHit => Some(SoundEffect::EnemyHit),
            GameEvent::FriendHit => Some(SoundEffect::FriendHit),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::TargetSpawned { .. }
            | GameEvent::TargetEscaped { .. }
            | GameEvent::Restarted => None,
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(self, SoundEffect::MusicLoop)
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_playing: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioManager {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            music_playing: false,
        }
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// React to one tick's events and the phase it left the game in
    pub fn update(&mut self, phase: GamePhase, events: &[GameEvent], sink: &mut dyn SoundSink) {
        for event in events {
            if matches!(event, GameEvent::GameOver { .. }) && self.music_playing {
                sink.stop_music();
                self.music_playing = false;
            }
            if let Some(effect) = SoundEffect::for_event(event) {
                let vol = self.effective_volume(effect);
                if vol > 0.0 {
                    sink.play(effect, vol);
                }
            }
        }

        // Silent music is not started; it starts on the first audible update
        if phase == GamePhase::Gameplay && !self.music_playing {
            let vol = self.effective_volume(SoundEffect::MusicLoop);
            if vol > 0.0 {
                sink.play(SoundEffect::MusicLoop, vol);
                self.music_playing = true;
            }
        }
    }
}
