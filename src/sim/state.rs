//! Session state and outcome types
//!
//! `SessionState` is the single authority for score, lives and statistics.
//! It is replaced wholesale on restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use crate::config::SessionConfig;

/// State machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Simulation running
    Playing,
    /// Frozen on the results screen, waiting for restart or quit
    Ended,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    TimeUp,
    OutOfLives,
}

/// Something the driver may want to react to (audio, HUD flashes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: EntityKind },
    CollectibleHit { id: u32, pos: Vec2, reaction_secs: f64 },
    HazardHit { id: u32, pos: Vec2, reaction_secs: f64 },
    /// Click that touched nothing
    Missed { pos: Vec2 },
    /// Entity rose off the top unclicked
    Escaped { id: u32, kind: EntityKind },
    SessionEnded { reason: EndReason, summary: SessionSummary },
    Restarted,
}

/// Final statistics shown on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    /// hits / max(clicks, 1), in [0, 1]
    pub accuracy: f64,
    /// Mean reaction time in seconds (0 if nothing was hit)
    pub avg_reaction_secs: f64,
    pub clicks: u32,
    pub hits: u32,
}

impl SessionSummary {
    /// Accuracy as a percentage rounded to two decimals
    pub fn accuracy_percent(&self) -> f64 {
        (self.accuracy * 10_000.0).round() / 100.0
    }
}

/// Score, lives, clock and statistics for one play-through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub lives: u32,
    /// Session clock (seconds) when play began
    pub start_time: f64,
    pub duration_limit: f64,
    /// Seconds elapsed as of the last tick
    pub elapsed: f64,
    /// Successful collectible hits
    pub hit_count: u32,
    /// Every pointer-down while playing
    pub click_count: u32,
    /// Per-hit latency (spawn to hit), in hit order
    pub reaction_times: Vec<f64>,
    pub level: u32,
}

impl SessionState {
    /// Fresh state for a session starting at `now`
    pub fn new(config: &SessionConfig, now: f64) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            start_time: now,
            duration_limit: config.duration_secs,
            elapsed: 0.0,
            hit_count: 0,
            click_count: 0,
            reaction_times: Vec::new(),
            level: config.starting_level,
        }
    }

    /// Seconds left (negative once overdue)
    pub fn remaining(&self) -> f64 {
        self.duration_limit - self.elapsed
    }

    pub fn accuracy(&self) -> f64 {
        self.hit_count as f64 / self.click_count.max(1) as f64
    }

    pub fn avg_reaction_time(&self) -> f64 {
        if self.reaction_times.is_empty() {
            0.0
        } else {
            self.reaction_times.iter().sum::<f64>() / self.reaction_times.len() as f64
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            accuracy: self.accuracy(),
            avg_reaction_secs: self.avg_reaction_time(),
            clicks: self.click_count,
            hits: self.hit_count,
        }
    }

    /// End condition, if any currently holds
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.lives == 0 {
            Some(EndReason::OutOfLives)
        } else if self.remaining() <= 0.0 {
            Some(EndReason::TimeUp)
        } else {
            None
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let config = SessionConfig::default();
        let state = SessionState::new(&config, 12.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.start_time, 12.0);
        assert_eq!(state.remaining(), 60.0);
        assert_eq!(state.end_reason(), None);
    }

    #[test]
    fn test_stats_with_no_input() {
        let state = SessionState::new(&SessionConfig::default(), 0.0);
        assert_eq!(state.accuracy(), 0.0);
        assert_eq!(state.avg_reaction_time(), 0.0);
        let summary = state.summary();
        assert_eq!(summary.accuracy_percent(), 0.0);
    }

    #[test]
    fn test_stats() {
        let mut state = SessionState::new(&SessionConfig::default(), 0.0);
        state.click_count = 3;
        state.hit_count = 2;
        state.reaction_times = vec![0.5, 1.0, 1.5];
        assert!((state.accuracy() - 2.0 / 3.0).abs() < 1e-12);
        assert!((state.avg_reaction_time() - 1.0).abs() < 1e-12);
        assert_eq!(state.summary().accuracy_percent(), 66.67);
    }

    #[test]
    fn test_end_reasons() {
        let mut state = SessionState::new(&SessionConfig::default(), 0.0);
        state.elapsed = 60.0;
        assert_eq!(state.end_reason(), Some(EndReason::TimeUp));
        state.lives = 0;
        assert_eq!(state.end_reason(), Some(EndReason::OutOfLives));
    }
}
