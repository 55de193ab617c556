//! Path management for paysplit
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `PAYSPLIT_DATA_DIR` environment variable (if set)
//! 2. `<home>/.paysplit`, where `<home>` is the OS user-profile directory

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::PaysplitError;

/// Name of the directory created under the user's home
const APP_DIR_NAME: &str = ".paysplit";

/// Default database file name (can be overridden in settings)
pub const DEFAULT_DATABASE_FILE: &str = "paysplit.db";

/// Manages all paths used by paysplit
#[derive(Debug, Clone)]
pub struct PaysplitPaths {
    /// Base directory for all paysplit data
    base_dir: PathBuf,
}

impl PaysplitPaths {
    /// Resolve the paths, preferring an explicit override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, PaysplitError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PaysplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.paysplit/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to a database file inside the base directory
    pub fn database_file(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PaysplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaysplitError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, PaysplitError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| PaysplitError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(APP_DIR_NAME))
}
