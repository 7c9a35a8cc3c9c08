//! Fixed-step accumulator clock

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame we are willing to catch up on (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Converts variable frame times into a whole number of `SIM_DT` ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStepClock {
    accumulator: f32,
}

impl FixedStepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's elapsed time, get back how many ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Time banked toward the next tick
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
