//! Spending breakdown by category
//!
//! Categories are free text compared case-insensitively, so "Food" and
//! "FOOD" land in the same bucket; the bucket key is the lowercased label.

use std::collections::BTreeMap;

use crate::models::{Ledger, Money, Period};

/// Per-category totals for an optional period filter
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    /// Lowercased category label -> total spent
    pub totals: BTreeMap<String, Money>,
    /// Sum of all group totals
    pub grand_total: Money,
}

/// Group matched expenses by category and sum their amounts
pub fn report_by_category(ledger: &Ledger, period: Option<Period>) -> CategoryReport {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    let mut grand_total = Money::zero();

    for expense in ledger.expenses() {
        if period.is_some_and(|p| expense.month != p) {
            continue;
        }
        let key = expense.category.to_lowercase();
        *totals.entry(key).or_default() += expense.amount;
        grand_total += expense.amount;
    }

    CategoryReport {
        totals,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    fn add(ledger: &mut Ledger, ymd: (i32, u32, u32), desc: &str, cents: i64, category: &str) {
        ledger.insert(NewExpense::new(
            NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            desc,
            Money::from_cents(cents),
            category,
        ));
    }

    #[test]
    fn test_groups_case_insensitively() {
        let mut ledger = Ledger::new();
        add(&mut ledger, (2024, 3, 5), "Coffee", 450, "Food");
        add(&mut ledger, (2024, 3, 7), "Groceries", 5500, "FOOD");
        add(&mut ledger, (2024, 3, 9), "Bus pass", 2000, "Travel");

        let report = report_by_category(&ledger, None);
        assert_eq!(report.totals.len(), 2);
        assert_eq!(report.totals["food"], Money::from_cents(5950));
        assert_eq!(report.totals["travel"], Money::from_cents(2000));
        assert_eq!(report.grand_total, Money::from_cents(7950));
    }

    #[test]
    fn test_period_filter() {
        let mut ledger = Ledger::new();
        add(&mut ledger, (2024, 3, 5), "Coffee", 450, "Food");
        add(&mut ledger, (2024, 4, 1), "Groceries", 5500, "Food");

        let report = report_by_category(&ledger, Some(Period::new(3).unwrap()));
        assert_eq!(report.totals["food"], Money::from_cents(450));
        assert_eq!(report.grand_total, Money::from_cents(450));
    }

    #[test]
    fn test_empty_ledger() {
        let report = report_by_category(&Ledger::new(), None);
        assert!(report.totals.is_empty());
        assert_eq!(report.grand_total, Money::zero());
    }

    #[test]
    fn test_single_coffee_scenario() {
        let mut ledger = Ledger::new();
        add(&mut ledger, (2024, 3, 5), "Coffee", 450, "Food");

        let report = report_by_category(&ledger, None);
        assert_eq!(report.totals.len(), 1);
        assert_eq!(report.totals["food"], Money::from_cents(450));
        assert_eq!(report.grand_total, Money::from_cents(450));
    }
}
