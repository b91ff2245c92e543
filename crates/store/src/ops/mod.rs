use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend};

use crate::{StoreError, scan::TagsColumn};

mod expenses;
mod schema;

/// The expense store.
///
/// Holds the connection pool it was built with; every operation issues a
/// single statement on it, so no transactions are opened here. Clones share
/// the same pool through the `Arc`.
#[derive(Clone, Debug)]
pub struct ExpenseStore {
    database: Arc<DatabaseConnection>,
    backend: DbBackend,
    tags: TagsColumn,
}

impl ExpenseStore {
    /// Accepts either an owned connection or one already shared with the
    /// caller, who can then close it once every store clone is gone.
    pub fn new(database: impl Into<Arc<DatabaseConnection>>) -> Self {
        let database = database.into();
        let backend = database.get_database_backend();
        Self {
            database,
            backend,
            tags: TagsColumn::for_backend(backend),
        }
    }
}

fn log_failure(operation: &'static str, err: &StoreError) {
    match err {
        StoreError::NotFound(id) => tracing::debug!(operation, id, "expense not found"),
        other => tracing::error!(operation, "expense store failure: {other}"),
    }
}
