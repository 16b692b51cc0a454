//! Fixed-step accumulator

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};

/// Converts variable frame times into whole simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add a frame's elapsed time and return how many ticks to run now.
    /// Long frames are clamped and at most `MAX_SUBSTEPS` ticks run per
    /// frame; backlog beyond that is dropped.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.dt);
        }
        substeps
    }

    /// Forget pending time (e.g. after the page was hidden)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut step = FixedStep::new(0.01);
        assert_eq!(step.advance(0.004), 0);
        assert_eq!(step.advance(0.004), 0);
        assert_eq!(step.advance(0.004), 1);
        assert_eq!(step.advance(0.025), 2);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut step = FixedStep::new(crate::consts::SIM_DT);
        // A 2 second hitch clamps to 0.1 s (12 ticks), then to MAX_SUBSTEPS
        assert_eq!(step.advance(2.0), MAX_SUBSTEPS);
        // Leftover backlog was dropped
        assert!(step.advance(0.0) <= 1);
    }

    #[test]
    fn test_reset() {
        let mut step = FixedStep::new(0.01);
        step.advance(0.009);
        step.reset();
        assert_eq!(step.advance(0.002), 0);
    }
}
