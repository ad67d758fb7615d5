//! Cross-session persistent ending flags.
//!
//! The flags survive across playthroughs: initialized all-false on first
//! run, set one at a time at ending nodes, never cleared. Callers own the
//! store's lifecycle — load it at process start, pass it by reference into
//! session start, and save it after an ending commit.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use echoes_script::Ending;

/// Errors reading or writing the persistent store. Fatal at the session
/// boundary; no partial-write recovery is attempted.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem failure.
    #[error("save file: {0}")]
    Io(#[from] io::Error),

    /// The save file exists but does not parse.
    #[error("save file format: {0}")]
    Format(#[from] serde_json::Error),
}

/// Which endings have ever been reached, across all sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndingFlags {
    /// The Scholar ending has been reached.
    pub ending_scholar: bool,
    /// The Guardian ending has been reached.
    pub ending_guardian: bool,
    /// The Liberator ending has been reached.
    pub ending_liberator: bool,
    /// The Shadow ending has been reached.
    pub ending_shadow: bool,
    /// The true ending has been reached. Only the true-route terminal
    /// node sets this.
    pub ending_true: bool,
}

impl EndingFlags {
    /// Whether an ending has been unlocked.
    pub fn is_unlocked(&self, ending: Ending) -> bool {
        match ending {
            Ending::Scholar => self.ending_scholar,
            Ending::Guardian => self.ending_guardian,
            Ending::Liberator => self.ending_liberator,
            Ending::Shadow => self.ending_shadow,
            Ending::True => self.ending_true,
        }
    }

    /// Unlock an ending. Returns whether the flag was newly set.
    ///
    /// Idempotent: re-unlocking an already-true flag is a no-op. Flags
    /// are never unset.
    pub fn unlock(&mut self, ending: Ending) -> bool {
        let slot = match ending {
            Ending::Scholar => &mut self.ending_scholar,
            Ending::Guardian => &mut self.ending_guardian,
            Ending::Liberator => &mut self.ending_liberator,
            Ending::Shadow => &mut self.ending_shadow,
            Ending::True => &mut self.ending_true,
        };
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Whether the true route is reachable: all four base endings
    /// unlocked.
    pub fn true_route_reachable(&self) -> bool {
        Ending::BASE.iter().all(|e| self.is_unlocked(*e))
    }

    /// How many endings have been unlocked.
    pub fn unlocked_count(&self) -> usize {
        Ending::ALL.iter().filter(|e| self.is_unlocked(**e)).count()
    }

    /// Load flags from a JSON save file. A missing file is the first
    /// run: all flags false.
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write flags to a JSON save file.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
