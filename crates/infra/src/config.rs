//! Storage configuration.
//!
//! Both directories are resolved once at startup and passed to the store
//! explicitly, so nothing below this layer looks at process-wide state.

use std::path::{Path, PathBuf};

use crate::store::StoreError;

/// Where data files are read and written, and where saved files end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Relative data file names are resolved against this directory.
    pub working_dir: PathBuf,
    /// Saved files are moved here, keeping their file name.
    pub home_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(working_dir: impl Into<PathBuf>, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            home_dir: home_dir.into(),
        }
    }

    /// Resolve the current directory and the invoking user's home directory.
    pub fn from_env() -> Result<Self, StoreError> {
        let working_dir = std::env::current_dir().map_err(|e| {
            StoreError::Environment(format!("failed to resolve current directory: {e}"))
        })?;
        let home_dir = dirs::home_dir().ok_or_else(|| {
            StoreError::Environment("failed to resolve the user's home directory".to_string())
        })?;

        Ok(Self::new(working_dir, home_dir))
    }

    /// Path of `file` as given on the command line.
    pub fn working_path(&self, file: &Path) -> PathBuf {
        self.working_dir.join(file)
    }

    /// Final location of `file` after a save: the home directory plus the
    /// file name component only.
    pub fn home_path(&self, file: &Path) -> Result<PathBuf, StoreError> {
        let name = file
            .file_name()
            .ok_or_else(|| StoreError::InvalidFileName(file.to_path_buf()))?;
        Ok(self.home_dir.join(name))
    }
}
