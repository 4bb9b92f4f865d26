//! Filtered summaries and the detailed per-month breakdown
//!
//! Pure reads over a ledger; nothing here mutates state.

use std::collections::BTreeMap;

use crate::models::{Expense, Ledger, Money, Period};

/// Cap and remaining headroom for a period with a budget set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    /// The period's spending cap
    pub cap: Money,
    /// Cap minus the summarized total; negative when the cap is overrun
    pub remaining: Money,
}

impl BudgetStatus {
    fn for_total(cap: Money, total: Money) -> Self {
        Self {
            cap,
            remaining: cap - total,
        }
    }
}

/// Result of a filtered summary query
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Expenses matching the filters, in insertion order
    pub matched: Vec<Expense>,
    /// Sum of matched amounts
    pub total: Money,
    /// Cap and remaining budget, when a period filter hit a set cap
    pub budget: Option<BudgetStatus>,
}

/// Summarize expenses, optionally filtered by period and/or category
///
/// Both filters AND together when given. When a period filter corresponds to
/// a set budget cap, the summary carries the cap and the remaining amount
/// (`cap - total`).
pub fn summarize(ledger: &Ledger, period: Option<Period>, category: Option<&str>) -> Summary {
    let matched: Vec<Expense> = ledger
        .filter(|e| {
            period.map_or(true, |p| e.month == p)
                && category.map_or(true, |c| e.category_matches(c))
        })
        .into_iter()
        .cloned()
        .collect();

    let total: Money = matched.iter().map(|e| e.amount).sum();

    let budget = period
        .and_then(|p| ledger.budgets().get(p))
        .map(|cap| BudgetStatus::for_total(cap, total));

    Summary {
        matched,
        total,
        budget,
    }
}

/// One period's slice of the detailed summary
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    /// The calendar month
    pub period: Period,
    /// The month's expenses, in insertion order
    pub expenses: Vec<Expense>,
    /// Sum of the month's amounts
    pub total_spent: Money,
    /// Cap and remaining budget, when a cap exists for the month
    pub budget: Option<BudgetStatus>,
}

/// Group all expenses by month, ascending, with budget info where set
pub fn detailed_summary(ledger: &Ledger) -> Vec<MonthSummary> {
    let mut by_month: BTreeMap<Period, Vec<Expense>> = BTreeMap::new();
    for expense in ledger.expenses() {
        by_month
            .entry(expense.month)
            .or_default()
            .push(expense.clone());
    }

    by_month
        .into_iter()
        .map(|(period, expenses)| {
            let total_spent: Money = expenses.iter().map(|e| e.amount).sum();
            let budget = ledger
                .budgets()
                .get(period)
                .map(|cap| BudgetStatus::for_total(cap, total_spent));
            MonthSummary {
                period,
                expenses,
                total_spent,
                budget,
            }
        })
        .collect()
}
