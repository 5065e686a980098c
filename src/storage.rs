//! Snapshot persistence for an external collaborator
//!
//! The core stores never perform I/O. A host that wants to persist state
//! takes each store's snapshot, wraps it in an [`AppSnapshot`], and saves
//! it here; on reload it rebuilds the stores with `from_snapshot`. The
//! stores themselves stay purely in-memory.

use crate::board::BoardSnapshot;
use crate::recipe::RecipeSnapshot;
use crate::workout::WorkoutSnapshot;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current snapshot file format version
///
/// Bump when the snapshot layout changes incompatibly; `Storage::load`
/// refuses files written by a newer format.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Combined snapshot of all three stores
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSnapshot {
    /// Format version for the TOML file (current: 1)
    ///
    /// Files without a version key are read as the current format.
    pub format_version: u32,
    pub recipes: RecipeSnapshot,
    pub workouts: WorkoutSnapshot,
    pub board: BoardSnapshot,
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            recipes: RecipeSnapshot::default(),
            workouts: WorkoutSnapshot::default(),
            board: BoardSnapshot::default(),
        }
    }
}

/// TOML file storage for an [`AppSnapshot`]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load a snapshot, or the empty default if the file does not exist
    pub fn load(&self) -> Result<AppSnapshot> {
        if !self.file_path.exists() {
            return Ok(AppSnapshot::default());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let snapshot: AppSnapshot = toml::from_str(&content)?;
        if snapshot.format_version > SNAPSHOT_FORMAT_VERSION {
            anyhow::bail!(
                "Unsupported snapshot format version {} (this build reads up to {})",
                snapshot.format_version,
                SNAPSHOT_FORMAT_VERSION
            );
        }
        Ok(snapshot)
    }

    /// Save a snapshot, overwriting any previous contents
    pub fn save(&self, snapshot: &AppSnapshot) -> Result<()> {
        let content = toml::to_string_pretty(snapshot)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
