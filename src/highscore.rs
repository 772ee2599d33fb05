//! High score persistence
//!
//! One decimal integer in `highscore.txt`. A missing or unreadable file
//! means "no prior high score", never an error; the file is rewritten only
//! when a finished run beats the stored value.

use std::fs;
use std::path::PathBuf;

/// High score file, relative to the working directory
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

#[derive(Debug, Clone)]
pub struct HighScore {
    best: u64,
    path: PathBuf,
}

impl HighScore {
    /// Read the stored high score, defaulting to 0 when the file is missing
    /// or does not parse.
    pub fn load() -> Self {
        Self::load_from(HIGH_SCORE_FILE)
    }

    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring unparseable high score in {}", path.display());
                0
            }),
            Err(_) => 0,
        };
        Self { best, path }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a finished run. The file is rewritten only when `score` beats
    /// the stored best; returns whether it did.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.save();
        true
    }

    fn save(&self) {
        if let Err(err) = fs::write(&self.path, self.best.to_string()) {
            log::warn!("failed to write {}: {err}", self.path.display());
        }
    }
}
