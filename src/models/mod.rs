//! Core data models for the expense ledger

pub mod budget;
pub mod expense;
pub mod ledger;
pub mod money;
pub mod period;

pub use budget::BudgetTable;
pub use expense::{Expense, NewExpense};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
