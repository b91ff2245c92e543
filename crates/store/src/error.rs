//! The module contains the errors the store can return.
//!
//! - [`NotFound`] no row has the requested id.
//! - [`Decode`] a row exists but its columns cannot be read back into an
//!   [`Expense`](crate::Expense).
//! - [`Database`] the statement itself failed (connectivity, constraints).
//! - [`Schema`] the `expenses` table could not be created.
//!
//!  [`NotFound`]: StoreError::NotFound
//!  [`Decode`]: StoreError::Decode
//!  [`Database`]: StoreError::Database
//!  [`Schema`]: StoreError::Schema
use sea_orm::DbErr;
use thiserror::Error;

/// Store custom errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("expense {0} not found")]
    NotFound(i64),
    #[error("cannot decode expense row: {0}")]
    Decode(#[source] DbErr),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("cannot create expenses table: {0}")]
    Schema(#[source] DbErr),
}

impl StoreError {
    /// `true` when the failure comes from the backing database rather than
    /// from a missing row.
    pub fn is_persistence(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Decode(a), Self::Decode(b))
            | (Self::Database(a), Self::Database(b))
            | (Self::Schema(a), Self::Schema(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
