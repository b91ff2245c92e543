use migration::{Migrator, MigratorTrait};

use super::{ExpenseStore, log_failure};
use crate::{ResultStore, StoreError};

impl ExpenseStore {
    /// Create the `expenses` table if it does not exist yet.
    ///
    /// Safe to call on every start. The caller decides whether an error is
    /// fatal.
    pub async fn ensure_schema(&self) -> ResultStore<()> {
        Migrator::up(&*self.database, None)
            .await
            .map_err(StoreError::Schema)
            .inspect_err(|err| log_failure("ensure_schema", err))?;

        tracing::info!("expenses table ready");
        Ok(())
    }
}
