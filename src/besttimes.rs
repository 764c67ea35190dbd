//! Fastest-clear leaderboard
//!
//! Tracks the quickest boss kills, persisted as JSON next to the settings
//! file. Lower is better; the table keeps the ten fastest runs overall and
//! can answer for the best run on a given difficulty.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::state::Difficulty;

/// Maximum number of entries to keep
pub const MAX_BEST_TIMES: usize = 10;

/// A single cleared run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestTimeEntry {
    /// Run duration in seconds
    pub seconds: f32,
    pub difficulty: Difficulty,
}

/// Fastest-clear table, sorted ascending by duration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestTimes {
    pub entries: Vec<BestTimeEntry>,
}

impl BestTimes {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether a run of this duration makes the table
    pub fn qualifies(&self, seconds: f32) -> bool {
        if seconds <= 0.0 {
            return false;
        }
        if self.entries.len() < MAX_BEST_TIMES {
            return true;
        }
        self.entries
            .last()
            .map(|e| seconds < e.seconds)
            .unwrap_or(true)
    }

    /// Record a cleared run. Returns the rank achieved (1-indexed) or
    /// None if it didn't qualify.
    pub fn add_time(&mut self, seconds: f32, difficulty: Difficulty) -> Option<usize> {
        if !self.qualifies(seconds) {
            return None;
        }

        let entry = BestTimeEntry {
            seconds,
            difficulty,
        };
        let pos = self.entries.iter().position(|e| seconds < e.seconds);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_BEST_TIMES);
        Some(rank)
    }

    /// Fastest clear on a given difficulty, if any
    pub fn best_for(&self, difficulty: Difficulty) -> Option<f32> {
        self.entries
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .map(|e| e.seconds)
            .next()
    }

    /// Load from a file; missing or corrupt files start a fresh table
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<BestTimes>(&json) {
                Ok(times) => {
                    log::info!("Loaded {} best times", times.entries.len());
                    times
                }
                Err(err) => {
                    log::warn!("Corrupt best-times file ({err}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No best times yet");
                Self::new()
            }
        }
    }

    /// Save to a file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        log::info!("Best times saved ({} entries)", self.entries.len());
        Ok(())
    }
}
