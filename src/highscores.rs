//! Best-score tracking
//!
//! Wraps a `ScoreStore`. Storage failures are logged and otherwise ignored;
//! the in-memory best score stays authoritative for the session.

use std::fmt;

use crate::persistence::{MemoryStore, ScoreStore};

pub struct HighScore {
    best: u64,
    store: Box<dyn ScoreStore + Send>,
}

impl fmt::Debug for HighScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HighScore").field("best", &self.best).finish()
    }
}

/// Clones are detached snapshots: same best score, writes go to memory
impl Clone for HighScore {
    fn clone(&self) -> Self {
        Self::in_memory(self.best)
    }
}

impl Default for HighScore {
    fn default() -> Self {
        Self::in_memory(0)
    }
}

impl HighScore {
    /// Read the stored best score; unreadable storage counts as zero
    pub fn load(mut store: Box<dyn ScoreStore + Send>) -> Self {
        let best = match store.load() {
            Ok(best) => {
                log::info!("High score loaded: {best}");
                best
            }
            Err(e) => {
                log::warn!("Could not read high score, starting at 0: {e}");
                0
            }
        };
        Self { best, store }
    }

    pub fn in_memory(best: u64) -> Self {
        Self {
            best,
            store: Box::new(MemoryStore::with_value(best)),
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn submit(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        log::info!("New high score: {score}");
        if let Err(e) = self.store.save(score) {
            log::warn!("Could not save high score: {e}");
        }
        true
    }
}
