//! Frame driver helpers
//!
//! Renderers hand us variable frame times; the simulation wants fixed ticks.
//! `FixedStep` accumulates frame time and reports how many ticks to run,
//! capped so a long stall cannot spiral.

use crate::consts::MAX_SUBSTEPS;

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f64,
    max_substeps: u32,
    accumulator: f64,
    /// Ticks issued so far; the session clock is `ticks * dt`
    ticks: u64,
}

impl FixedStep {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            dt: 1.0 / tick_rate.max(1) as f64,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Session clock after the last issued tick
    pub fn now(&self) -> f64 {
        self.ticks as f64 * self.dt
    }

    /// Feed one frame's elapsed time; returns the session clock value of each
    /// tick to run, oldest first
    pub fn advance(&mut self, frame_secs: f64) -> Vec<f64> {
        // Clamp huge frames (tab switch, debugger) like any other stall
        self.accumulator += frame_secs.clamp(0.0, 0.1);

        let mut times = Vec::new();
        while self.accumulator >= self.dt && (times.len() as u32) < self.max_substeps {
            self.accumulator -= self.dt;
            self.ticks += 1;
            times.push(self.now());
        }
        if times.len() as u32 == self.max_substeps && self.accumulator >= self.dt {
            log::debug!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        times
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_frames() {
        let mut clock = FixedStep::new(60);
        let mut total = 0;
        for _ in 0..60 {
            total += clock.advance(1.0 / 60.0 + 1e-9).len();
        }
        assert_eq!(total, 60);
        assert!((clock.now() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_slow_frames_run_multiple_ticks() {
        let mut clock = FixedStep::new(60);
        let times = clock.advance(0.05 + 1e-9);
        assert_eq!(times.len(), 3);
        assert!(times.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_substep_cap() {
        // 0.1s at 240 Hz is 24 ticks of work
        let mut clock = FixedStep::new(240);
        let times = clock.advance(0.1);
        assert_eq!(times.len(), MAX_SUBSTEPS as usize);
        // Backlog dropped, not replayed next frame
        assert!(clock.advance(0.0).is_empty());
    }
}
