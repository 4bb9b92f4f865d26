//! Query and aggregation engine
//!
//! Pure functions over a loaded [`Ledger`](crate::models::Ledger); none of
//! them mutate state, so repeated calls with no intervening write yield
//! identical results.

pub mod category;
pub mod summary;
pub mod trend;

pub use category::{report_by_category, CategoryReport};
pub use summary::{detailed_summary, summarize, BudgetStatus, MonthSummary, Summary};
pub use trend::{spending_trend, SpendingTrend, TrendEntry};

use crate::models::{Expense, Ledger};

/// List all expenses, optionally restricted to one category
///
/// The category filter compares case-insensitively; order is insertion
/// order.
pub fn list(ledger: &Ledger, category: Option<&str>) -> Vec<Expense> {
    ledger
        .filter(|e| category.map_or(true, |c| e.category_matches(c)))
        .into_iter()
        .cloned()
        .collect()
}
