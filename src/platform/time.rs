//! Fixed-step timing
//!
//! Frames arrive at whatever rate the host manages; the simulation always
//! advances in whole ticks of `dt`.

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            dt: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Add a frame's elapsed seconds and return how many ticks to run.
    ///
    /// Long frames are capped (0.1 s of input, `MAX_SUBSTEPS` ticks) so a
    /// stall cannot snowball into an ever-growing backlog.
    pub fn advance(&mut self, frame_secs: f32) -> u32 {
        self.accumulator += frame_secs.clamp(0.0, 0.1);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == self.max_substeps {
            // Drop the remainder rather than carrying it into the next frame
            self.accumulator = self.accumulator.min(self.dt);
        }
        steps
    }

    /// Forget any partial tick (after a restart or a long pause)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
