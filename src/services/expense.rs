//! Expense service
//!
//! The plain-value facade over the ledger engine: each mutating call loads
//! the full ledger, applies the operation, and persists before returning;
//! each read loads and computes. A failed operation never leaves a partial
//! mutation behind, because nothing is saved until the mutation succeeded
//! in memory.

use chrono::NaiveDate;
use tracing::info;

use crate::config::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Money, NewExpense, Period};
use crate::reports::{
    self, CategoryReport, MonthSummary, SpendingTrend, Summary,
};
use crate::services::guard;
use crate::storage::LedgerStore;

/// Service for recording and querying expenses
pub struct ExpenseService {
    store: LedgerStore,
}

impl ExpenseService {
    /// Create a new expense service over the given store
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Create a service over the ledger file in the platform data directory
    pub fn open_default() -> LedgerResult<Self> {
        let paths = LedgerPaths::new()?;
        paths.ensure_directories()?;
        Ok(Self::new(LedgerStore::new(paths.ledger_file())))
    }

    /// The underlying store
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Record a new expense, returning its assigned id
    ///
    /// Runs validation and the budget guard before anything is inserted; a
    /// rejected expense is never added and never persisted.
    pub fn add_expense(
        &self,
        date: NaiveDate,
        description: &str,
        amount: Money,
        category: &str,
    ) -> LedgerResult<u64> {
        let mut ledger = self.store.load()?;

        let candidate = NewExpense::new(date, description, amount, category);
        guard::admit(&ledger, &candidate)?;

        let id = ledger.insert(candidate);
        self.store.save(&ledger)?;

        info!(id, %date, %amount, category, "expense recorded");
        Ok(id)
    }

    /// Delete an expense by id
    ///
    /// An unknown id reports [`LedgerError::NotFound`] and writes nothing.
    pub fn delete_expense(&self, id: u64) -> LedgerResult<()> {
        let mut ledger = self.store.load()?;

        if !ledger.remove(id) {
            return Err(LedgerError::expense_not_found(id));
        }

        self.store.save(&ledger)?;
        info!(id, "expense deleted");
        Ok(())
    }

    /// Look up an expense by id
    pub fn get_expense(&self, id: u64) -> LedgerResult<Expense> {
        let ledger = self.store.load()?;
        ledger
            .find(id)
            .cloned()
            .ok_or_else(|| LedgerError::expense_not_found(id))
    }

    /// Set the spending cap for a period, overwriting any existing cap
    pub fn set_budget(&self, period: Period, cap: Money) -> LedgerResult<()> {
        if !cap.is_positive() {
            return Err(LedgerError::Validation(format!(
                "budget cap must be positive, got {}",
                cap
            )));
        }

        let mut ledger = self.store.load()?;
        ledger.budgets_mut().set(period, cap);
        self.store.save(&ledger)?;

        info!(%period, %cap, "budget cap set");
        Ok(())
    }

    /// Get the spending cap for a period, if one is set
    pub fn budget(&self, period: Period) -> LedgerResult<Option<Money>> {
        Ok(self.store.load()?.budgets().get(period))
    }

    /// List expenses, optionally restricted to one category
    pub fn list(&self, category: Option<&str>) -> LedgerResult<Vec<Expense>> {
        Ok(reports::list(&self.store.load()?, category))
    }

    /// Summarize expenses with optional period and category filters
    pub fn summarize(
        &self,
        period: Option<Period>,
        category: Option<&str>,
    ) -> LedgerResult<Summary> {
        Ok(reports::summarize(&self.store.load()?, period, category))
    }

    /// Per-category totals with an optional period filter
    pub fn report_by_category(&self, period: Option<Period>) -> LedgerResult<CategoryReport> {
        Ok(reports::report_by_category(&self.store.load()?, period))
    }

    /// Per-month totals, ascending
    pub fn spending_trend(&self) -> LedgerResult<SpendingTrend> {
        Ok(reports::spending_trend(&self.store.load()?))
    }

    /// Per-month expenses with totals and remaining budget, ascending
    pub fn detailed_summary(&self) -> LedgerResult<Vec<MonthSummary>> {
        Ok(reports::detailed_summary(&self.store.load()?))
    }
}
