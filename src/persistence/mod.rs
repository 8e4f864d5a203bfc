//! High score storage
//!
//! The only persisted value is a single non-negative integer. Stores report
//! failures; deciding whether they matter is up to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;

/// Somewhere to keep the best score between runs
pub trait ScoreStore {
    fn load(&mut self) -> Result<u64, PersistenceError>;
    fn save(&mut self, score: u64) -> Result<(), PersistenceError>;
}

/// Plain-text file holding one decimal integer
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for TextFileStore {
    /// A missing file reads as zero
    fn load(&mut self) -> Result<u64, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed
            .parse::<u64>()
            .map_err(|_| PersistenceError::Malformed { contents })
    }

    fn save(&mut self, score: u64) -> Result<(), PersistenceError> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: u64,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryStore {
    pub fn with_value(value: u64) -> Self {
        Self { value, saves: 0 }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u64, PersistenceError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u64) -> Result<(), PersistenceError> {
        self.value = score;
        self.saves += 1;
        Ok(())
    }
}
