//! spendcap - budget-capped personal expense ledger engine
//!
//! Records discrete spending events, enforces a per-month spending cap on
//! every insertion, and answers queries over the recorded events. The whole
//! ledger lives in one JSON document; every operation loads it, computes in
//! memory, and (for mutations) writes it back atomically.
//!
//! This crate is the engine only. Prompting, input parsing, and tabular
//! rendering belong to the caller; the engine exposes plain values and typed
//! errors and performs no console I/O.
//!
//! # Architecture
//!
//! - `config`: data-directory and ledger-file path resolution
//! - `error`: the `LedgerError` taxonomy
//! - `models`: `Money`, `Period`, `Expense`, `BudgetTable`, `Ledger`
//! - `storage`: JSON file store with atomic writes and empty bootstrap
//! - `services`: the budget guard and the `ExpenseService` facade
//! - `reports`: pure aggregation queries (summaries, category totals, trend)
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use spendcap::models::{Money, Period};
//! use spendcap::services::ExpenseService;
//! use spendcap::storage::LedgerStore;
//!
//! # fn main() -> Result<(), spendcap::LedgerError> {
//! let service = ExpenseService::new(LedgerStore::new("expenses.json"));
//!
//! service.set_budget(Period::new(3)?, Money::from_cents(10_000))?;
//! let id = service.add_expense(
//!     NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
//!     "Coffee",
//!     Money::from_cents(450),
//!     "Food",
//! )?;
//!
//! let summary = service.summarize(Some(Period::new(3)?), None)?;
//! println!("spent {} (id {})", summary.total, id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
