//! Fixed timestep accumulator
//!
//! Converts variable frame times into whole simulation ticks.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame delta accepted (seconds); anything longer is a stall
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct TickClock {
    tick_dt: f32,
    accumulator: f32,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick_dt: 1.0 / ticks_per_second.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        self.tick_dt
    }

    /// Add a frame's elapsed time; returns how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }
        // Drop backlog we refused to simulate
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.tick_dt);
        }
        substeps
    }
}
