//! Month-over-month spending trend

use std::collections::BTreeMap;

use crate::models::{Ledger, Money, Period};

/// One month's total in the trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendEntry {
    pub period: Period,
    pub total: Money,
}

/// Per-month totals, ascending by period, with a grand total
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingTrend {
    pub entries: Vec<TrendEntry>,
    pub grand_total: Money,
}

/// Group all expenses by month and sum per group
///
/// Entries come back ascending by period key; "01" through "12" sort the
/// same numerically and lexicographically.
pub fn spending_trend(ledger: &Ledger) -> SpendingTrend {
    let mut by_month: BTreeMap<Period, Money> = BTreeMap::new();
    let mut grand_total = Money::zero();

    for expense in ledger.expenses() {
        *by_month.entry(expense.month).or_default() += expense.amount;
        grand_total += expense.amount;
    }

    SpendingTrend {
        entries: by_month
            .into_iter()
            .map(|(period, total)| TrendEntry { period, total })
            .collect(),
        grand_total,
    }
}
