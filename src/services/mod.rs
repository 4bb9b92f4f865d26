//! Business logic layer
//!
//! The budget guard and the expense service, sitting between the storage
//! layer and whatever front end drives the engine.

pub mod expense;
pub mod guard;

pub use expense::ExpenseService;
pub use guard::admit;
