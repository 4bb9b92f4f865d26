//! Expense model
//!
//! A single spending event. Expenses are immutable once recorded; the only
//! mutation the ledger supports is removal by id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

use super::money::Money;
use super::period::Period;

/// A recorded spending event
///
/// The `month` field is stored redundantly in the backing record; it is
/// always derived from `date`, both on construction and on deserialization,
/// so the two can never disagree in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExpense")]
pub struct Expense {
    /// Unique identifier within the ledger
    pub id: u64,

    /// Date the expense occurred
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (strictly positive)
    pub amount: Money,

    /// Free-text category label, compared case-insensitively
    pub category: String,

    /// Calendar month derived from `date`
    pub month: Period,
}

impl Expense {
    /// Create a new expense, deriving the month from the date
    pub fn new(
        id: u64,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
            category: category.into(),
            month: Period::from_date(date),
        }
    }

    /// Validate the expense fields
    ///
    /// Checks the invariants that hold for every stored expense: a non-empty
    /// description and a strictly positive amount.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "description must not be empty".into(),
            ));
        }
        if !self.amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Case-insensitive category comparison
    pub fn category_matches(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

/// A candidate expense that has not been admitted to the ledger yet
///
/// Carries everything except the id, which the ledger assigns on insert.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: String,
}

impl NewExpense {
    /// Create a candidate expense
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// The period this expense would fall into
    pub fn period(&self) -> Period {
        Period::from_date(self.date)
    }

    /// Validate the candidate's fields
    ///
    /// Runs strictly before any budget arithmetic: an empty description or a
    /// non-positive amount is a [`LedgerError::Validation`], distinct from a
    /// budget rejection.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "description must not be empty".into(),
            ));
        }
        if !self.amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Wire-format mirror of [`Expense`], used to re-check the stored-expense
/// invariants when decoding the backing record.
#[derive(Deserialize)]
struct RawExpense {
    id: u64,
    date: NaiveDate,
    description: String,
    amount: Money,
    category: String,
    month: Period,
}

impl TryFrom<RawExpense> for Expense {
    type Error = String;

    fn try_from(raw: RawExpense) -> Result<Self, Self::Error> {
        let derived = Period::from_date(raw.date);
        if raw.month != derived {
            return Err(format!(
                "expense {}: month \"{}\" does not match date {} (expected \"{}\")",
                raw.id, raw.month, raw.date, derived
            ));
        }
        if raw.id == 0 {
            return Err(format!("expense id must be positive, got {}", raw.id));
        }
        let expense = Self {
            id: raw.id,
            date: raw.date,
            description: raw.description,
            amount: raw.amount,
            category: raw.category,
            month: raw.month,
        };
        // Stored expenses obey the same invariants as admitted ones
        expense
            .validate()
            .map_err(|e| format!("expense {}: {}", expense.id, e))?;
        Ok(expense)
    }
}
