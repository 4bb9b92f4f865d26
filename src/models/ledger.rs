//! Ledger: the full persisted state
//!
//! Holds every recorded expense (in insertion order) plus the budget table.
//! This is the single document the store loads and saves; all repository
//! operations work on an explicit `Ledger` value rather than hidden state.

use serde::{Deserialize, Serialize};

use super::budget::BudgetTable;
use super::expense::{Expense, NewExpense};
use super::money::Money;
use super::period::Period;

/// The store's payload: all expenses plus all budget caps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Recorded expenses, in insertion order
    #[serde(default)]
    expenses: Vec<Expense>,

    /// Per-period spending caps
    #[serde(default, rename = "budget")]
    budgets: BudgetTable,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the ledger holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The budget table
    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    /// Mutable access to the budget table
    pub fn budgets_mut(&mut self) -> &mut BudgetTable {
        &mut self.budgets
    }

    /// The id the next inserted expense will receive
    ///
    /// One past the highest id currently present (1 for an empty ledger).
    /// Deriving from the maximum rather than the count keeps ids unique
    /// after delete-then-insert sequences within a load.
    pub fn next_id(&self) -> u64 {
        self.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Append a candidate expense, assigning and returning its id
    ///
    /// Pure in-memory mutation; admission checks happen before this call and
    /// the caller is responsible for persisting the ledger afterwards.
    pub fn insert(&mut self, candidate: NewExpense) -> u64 {
        let id = self.next_id();
        self.expenses.push(Expense::new(
            id,
            candidate.date,
            candidate.description,
            candidate.amount,
            candidate.category,
        ));
        id
    }

    /// Look up an expense by id
    pub fn find(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Remove the first expense with the given id
    ///
    /// Returns whether a removal occurred; an absent id leaves the ledger
    /// unchanged.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.expenses.iter().position(|e| e.id == id) {
            Some(index) => {
                self.expenses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Expenses matching a predicate, in insertion order
    pub fn filter<P>(&self, predicate: P) -> Vec<&Expense>
    where
        P: Fn(&Expense) -> bool,
    {
        self.expenses.iter().filter(|e| predicate(*e)).collect()
    }

    /// Total amount spent in a period
    pub fn spent_in(&self, period: Period) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.month == period)
            .map(|e| e.amount)
            .sum()
    }
}
