//! The leaderboard store.
//!
//! A plain JSON array of score records on disk, no schema versioning.
//! Storage trouble is never fatal to a game: `load` treats a missing,
//! unreadable, or malformed file as an empty list, and a failed `append`
//! surfaces as an error the caller renders as a warning next to the win
//! message.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::zones::Difficulty;

/// Leaderboard storage failure. Only `append` reports these.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub moves: u32,
    pub timestamp: String,
    pub difficulty: Difficulty,
}

impl ScoreEntry {
    /// Sort key: fewest moves first, hard beating easy on ties.
    fn sort_key(&self) -> (u32, u8) {
        let difficulty_order = match self.difficulty {
            Difficulty::Hard => 0,
            Difficulty::Easy => 1,
        };
        (self.moves, difficulty_order)
    }
}

/// File-backed score store.
#[derive(Clone, Debug)]
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    /// Number of entries shown by `top_scores`.
    pub const TOP_N: usize = 5;

    /// Create a store backed by the given file path. The file need not
    /// exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries in stored order. Missing or malformed storage
    /// yields the empty list, never an error.
    #[must_use]
    pub fn load(&self) -> Vec<ScoreEntry> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Append an entry, rewriting the whole list.
    pub fn append(&self, entry: ScoreEntry) -> Result<(), LeaderboardError> {
        let mut entries = self.load();
        entries.push(entry);
        let raw = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// The best `n` entries: ascending by moves, ties broken hard before
    /// easy.
    #[must_use]
    pub fn top_scores(&self, n: usize) -> Vec<ScoreEntry> {
        let mut entries = self.load();
        entries.sort_by_key(ScoreEntry::sort_key);
        entries.truncate(n);
        entries
    }
}
