//! Platform abstraction layer
//!
//! The simulation talks to the outside world only through these seams:
//! - `InputSource`: pointer position and trigger state, once per frame
//! - `Presenter`: draws a `FrameView`
//! - `SoundSink`: plays cues and stops the music
//! - `FixedStepClock`: turns frame times into fixed ticks
//!
//! `Driver` wires them together for one frame at a time.

pub mod clock;

pub use clock::FixedStepClock;

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::SIM_DT;
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};
use crate::view::FrameView;

/// Supplies the latest input state
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Draws a finished frame
pub trait Presenter {
    fn present(&mut self, view: &FrameView);
}

/// Audio output
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
    fn stop_music(&mut self);
}

/// Owns the game state and steps it from frame callbacks
#[derive(Debug, Clone)]
pub struct Driver {
    pub state: GameState,
    pub clock: FixedStepClock,
    pub audio: AudioManager,
    /// Input gathered since the last tick ran
    pending: TickInput,
    /// A press seen on a frame that has not reached a tick yet
    press_latched: bool,
    last_polled_held: bool,
}

impl Driver {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings.to_game_config()),
            clock: FixedStepClock::new(),
            audio: AudioManager::from_settings(settings),
            pending: TickInput::default(),
            press_latched: false,
            last_polled_held: false,
        }
    }

    /// Input still waiting for a tick
    pub fn pending_input(&self) -> &TickInput {
        &self.pending
    }

    /// Fold one poll into the pending input. The newest pointer wins and the
    /// trigger tracks the latest state, but a press is held back until a
    /// tick has seen it.
    fn merge_input(&mut self, polled: TickInput) {
        if polled.pointer.is_some() {
            self.pending.pointer = polled.pointer;
        }
        if polled.trigger_held && !self.last_polled_held {
            self.press_latched = true;
        }
        self.last_polled_held = polled.trigger_held;
        self.pending.trigger_held = polled.trigger_held;
    }

    /// Run one frame: poll input, run however many ticks `frame_dt` covers,
    /// forward audio cues per tick, then present. Returns the tick count.
    pub fn frame(
        &mut self,
        frame_dt: f32,
        input: &mut dyn InputSource,
        sink: &mut dyn SoundSink,
        presenter: &mut dyn Presenter,
    ) -> u32 {
        let polled = input.poll();
        self.merge_input(polled);
        let ticks = self.clock.advance(frame_dt);

        for _ in 0..ticks {
            let input = TickInput {
                pointer: self.pending.pointer.take(),
                trigger_held: self.pending.trigger_held || self.press_latched,
            };
            self.press_latched = false;

            tick(&mut self.state, &input, SIM_DT);
            self.audio.update(self.state.phase, &self.state.events, sink);
        }

        presenter.present(&FrameView::capture(&self.state));
        ticks
    }
}
