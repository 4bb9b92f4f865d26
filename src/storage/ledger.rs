//! Ledger store: single-document JSON persistence
//!
//! The whole ledger (expenses + budgets) is read and written as one unit.
//! A missing or empty backing file bootstraps to the empty ledger; malformed
//! content is a decode failure the store does not try to repair.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LedgerError;
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

/// Reads and writes the ledger document at a fixed path
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted ledger
    ///
    /// Returns the empty ledger when the backing file does not exist or is
    /// zero-length.
    pub fn load(&self) -> Result<Ledger, LedgerError> {
        let ledger: Ledger = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            expenses = ledger.len(),
            "loaded ledger"
        );
        Ok(ledger)
    }

    /// Persist the ledger, overwriting the backing file atomically
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, ledger)?;
        debug!(
            path = %self.path.display(),
            expenses = ledger.len(),
            "saved ledger"
        );
        Ok(())
    }
}
