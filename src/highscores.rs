//! High score leaderboard system
//!
//! Persisted as a JSON file, tracks the top 10 finished sessions.

use std::cmp::Ordering;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::sim::SessionSummary;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score
    pub score: u32,
    /// Hits per click, 0-1
    pub accuracy: f64,
    /// Mean reaction time in seconds
    pub avg_reaction_secs: f64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

impl HighScoreEntry {
    fn new(summary: &SessionSummary, timestamp: f64) -> Self {
        Self {
            score: summary.score,
            accuracy: summary.accuracy,
            avg_reaction_secs: summary.avg_reaction_secs,
            timestamp,
        }
    }

    /// Leaderboard order: higher score, then steadier aim, then quicker hands.
    /// `Less` means `self` ranks above `other`.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score).then_with(|| {
            other
                .accuracy
                .partial_cmp(&self.accuracy)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    self.avg_reaction_secs
                        .partial_cmp(&other.avg_reaction_secs)
                        .unwrap_or(Ordering::Equal)
                })
        })
    }
}

/// High score leaderboard, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a finished session. Returns its 1-indexed rank, or None if it
    /// scored nothing or ranks below a full board. A session level with an
    /// existing entry goes underneath it.
    pub fn record(&mut self, summary: &SessionSummary, timestamp: f64) -> Option<usize> {
        if summary.score == 0 {
            return None;
        }
        let entry = HighScoreEntry::new(summary, timestamp);
        let pos = self
            .entries
            .partition_point(|e| e.rank_cmp(&entry) != Ordering::Greater);
        if pos >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(pos + 1)
    }

    /// Load high scores from `path`, starting fresh if missing or unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(scores) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Ignoring high scores at {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, StorageError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save high scores to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
