//! High score persistence
//!
//! A single best-score value behind a storage trait. Persistence is
//! best-effort: storage failures are logged and swallowed, gameplay never
//! sees them.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Best-effort high-score storage consumed by the games.
pub trait ScoreStore {
    /// Current best score, 0 when nothing is stored.
    fn best(&self) -> u32;
    /// Persist a new best. Callers only pass values that beat `best`.
    fn record(&mut self, score: u32);
}

/// In-memory store for tests and hosts without storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    best: u32,
}

impl ScoreStore for MemoryScoreStore {
    fn best(&self) -> u32 {
        self.best
    }

    fn record(&mut self, score: u32) {
        self.best = score;
    }
}

/// On-disk JSON envelope.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreFile {
    best: u32,
}

/// JSON-file-backed store.
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    best: u32,
}

impl JsonScoreStore {
    /// Open the store at `path`, reading the existing best if present.
    /// A missing or corrupt file starts the score at zero.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = fs::read_to_string(&path)
            .ok()
            .and_then(|json| serde_json::from_str::<HighScoreFile>(&json).ok())
            .map(|file| file.best)
            .unwrap_or(0);
        if best > 0 {
            log::info!("loaded high score {best} from {}", path.display());
        }
        Self { path, best }
    }
}

impl ScoreStore for JsonScoreStore {
    fn best(&self) -> u32 {
        self.best
    }

    fn record(&mut self, score: u32) {
        self.best = score;
        match serde_json::to_string(&HighScoreFile { best: score }) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("failed to save high score: {err}");
                } else {
                    log::info!("high score {score} saved");
                }
            }
            Err(err) => log::warn!("failed to encode high score: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.best(), 0);
        store.record(750);
        assert_eq!(store.best(), 750);
    }

    #[test]
    fn test_json_store_round_trip() {
        let path = std::env::temp_dir().join(format!("arcade_sim_score_{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        let mut store = JsonScoreStore::open(&path);
        assert_eq!(store.best(), 0);
        store.record(1200);

        let reopened = JsonScoreStore::open(&path);
        assert_eq!(reopened.best(), 1200);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let path = std::env::temp_dir().join(format!("arcade_sim_junk_{}.json", std::process::id()));
        fs::write(&path, "not json").unwrap();
        let store = JsonScoreStore::open(&path);
        assert_eq!(store.best(), 0);
        let _ = fs::remove_file(&path);
    }
}
