//! Best score tracking
//!
//! Persisted through a [`KeyValueStore`]. Storage failures never reach the
//! game: an unreadable value counts as no record, a failed write is logged
//! and the best score is still kept in memory.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, MemoryStore, StorageError};

/// Stored best run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub score: u64,
    /// 0-based level reached
    pub level: u32,
}

/// Best score with its backing store
#[derive(Debug)]
pub struct HighScores<S: KeyValueStore = MemoryStore> {
    store: S,
    best: HighScoreRecord,
}

impl<S: KeyValueStore> HighScores<S> {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "rock_drift_highscore";

    /// Read the stored record (0 when missing or unreadable)
    pub fn load(store: S) -> Self {
        let best = match Self::read(&store) {
            Ok(Some(record)) => {
                log::info!("Loaded high score {} (level {})", record.score, record.level + 1);
                record
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                HighScoreRecord::default()
            }
            Err(e) => {
                log::warn!("Failed to load high score: {}", e);
                HighScoreRecord::default()
            }
        };
        Self { store, best }
    }

    fn read(store: &S) -> Result<Option<HighScoreRecord>, StorageError> {
        let Some(json) = store.get(Self::STORAGE_KEY)? else {
            return Ok(None);
        };
        // Older saves hold a bare number
        if let Ok(score) = json.trim().parse::<u64>() {
            return Ok(Some(HighScoreRecord { score, level: 0 }));
        }
        Ok(Some(serde_json::from_str(&json)?))
    }

    pub fn best(&self) -> u64 {
        self.best.score
    }

    pub fn record(&self) -> HighScoreRecord {
        self.best
    }

    /// Strictly beats the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best.score
    }

    /// Record a new best. Returns true when `score` beat the previous best,
    /// whether or not the write succeeded.
    pub fn submit(&mut self, score: u64, level: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = HighScoreRecord { score, level };
        match self.save() {
            Ok(()) => log::debug!("High score saved ({})", score),
            Err(e) => log::warn!("Failed to save high score {}: {}", score, e),
        }
        true
    }

    fn save(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.best)?;
        self.store.set(Self::STORAGE_KEY, &json)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl Default for HighScores<MemoryStore> {
    fn default() -> Self {
        Self::load(MemoryStore::new())
    }
}
