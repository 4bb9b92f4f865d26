//! Path management for spendcap
//!
//! Resolves where the ledger's backing file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDCAP_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (XDG on Linux, Application Support on
//!    macOS, `%APPDATA%` on Windows) under `spendcap/`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Manages the paths used by spendcap
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all spendcap data
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current platform.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDCAP_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "spendcap").ok_or_else(|| {
                LedgerError::Config("Could not determine a data directory".into())
            })?;
            dirs.data_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the ledger's backing file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            LedgerError::Storage(format!("Failed to create data directory: {}", e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), &temp_dir.path().to_path_buf());
        assert_eq!(paths.ledger_file(), temp_dir.path().join("expenses.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("spendcap");
        let paths = LedgerPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
