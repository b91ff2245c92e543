//! Persistence and row mapping for expenses.
//!
//! [`ExpenseStore`] owns the database handle and is the only component that
//! knows how an [`Expense`] is laid out in the `expenses` table.
pub use error::StoreError;
pub use expense::{Expense, ExpenseList};
pub use ops::ExpenseStore;

mod error;
mod expense;
mod ops;
mod scan;

pub type ResultStore<T> = Result<T, StoreError>;
