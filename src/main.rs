//! Laser entry point
//!
//! Native headless runner: drives the simulation with a scripted autopilot
//! and logs what a real frontend would draw and play.

use glam::Vec2;
use serde::Serialize;

use laser::Settings;
use laser::audio::SoundEffect;
use laser::consts::SIM_DT;
use laser::platform::{Driver, InputSource, Presenter, SoundSink};
use laser::sim::{GamePhase, TickInput};
use laser::view::FrameView;

/// Frames to simulate (one minute at 60 fps)
const DEMO_FRAMES: u32 = 60 * 60;

/// Sweeps the pointer back and forth across the sky and pulses the trigger
struct Autopilot {
    frame: u32,
    width: f32,
    height: f32,
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> TickInput {
        self.frame += 1;
        let t = self.frame as f32 * SIM_DT;
        let x = self.width * (0.5 + 0.45 * (t * 0.8).sin());
        let y = self.height * 0.3;
        TickInput {
            pointer: Some(Vec2::new(x, y)),
            trigger_held: (self.frame / 20) % 2 == 0,
        }
    }
}

/// Logs phase changes instead of drawing
#[derive(Default)]
struct LogPresenter {
    last_phase: Option<GamePhase>,
    runs: u32,
    best_score: u32,
}

impl Presenter for LogPresenter {
    fn present(&mut self, view: &FrameView) {
        if self.last_phase != Some(view.phase) {
            if view.shows_result() {
                self.runs += 1;
                self.best_score = self.best_score.max(view.score);
                log::info!("{}", view.final_score_label());
            } else {
                log::info!("{} | {}", view.life_label(), view.score_label());
            }
            self.last_phase = Some(view.phase);
        }
    }
}

struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {:?} at {:.2}", effect, volume);
    }

    fn stop_music(&mut self) {
        log::debug!("music stopped");
    }
}

#[derive(Serialize)]
struct Summary {
    frames: u32,
    ticks: u64,
    finished_runs: u32,
    best_score: u32,
    last_frame: FrameView,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Laser (headless) starting...");

    let settings = Settings::load_from_env();
    let mut driver = Driver::new(&settings);
    log::info!("Game initialized with seed: {}", settings.seed);

    let mut input = Autopilot {
        frame: 0,
        width: settings.play_width,
        height: settings.play_height,
    };
    let mut sink = LogSink;
    let mut presenter = LogPresenter::default();

    for _ in 0..DEMO_FRAMES {
        driver.frame(SIM_DT, &mut input, &mut sink, &mut presenter);
    }

    let summary = Summary {
        frames: DEMO_FRAMES,
        ticks: driver.state.time_ticks,
        finished_runs: presenter.runs,
        best_score: presenter.best_score,
        last_frame: FrameView::capture(&driver.state),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser frontend drives `platform::Driver` itself
}
