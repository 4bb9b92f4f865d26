//! Storage layer for spendcap
//!
//! JSON file storage with atomic writes and empty-store bootstrap. The
//! ledger is a single document; there is no per-entity file splitting and no
//! locking discipline, because the engine assumes one active process.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerStore;
