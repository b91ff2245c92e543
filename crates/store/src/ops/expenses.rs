use sea_orm::{
    ConnectionTrait, DbErr,
    sea_query::{Expr, Order, Query, SelectStatement},
};

use super::{ExpenseStore, log_failure};
use crate::{
    Expense, ExpenseList, ResultStore, StoreError,
    expense::{COLUMNS, Expenses},
    scan::{read_id, scan_expense},
};

impl ExpenseStore {
    /// Insert `expense` and return it with the id the database assigned.
    pub async fn create(&self, expense: Expense) -> ResultStore<Expense> {
        self.insert(expense)
            .await
            .inspect_err(|err| log_failure("create", err))
    }

    /// Fetch the expense whose id is `id`.
    pub async fn get_by_id(&self, id: i64) -> ResultStore<Expense> {
        self.select_one(id)
            .await
            .inspect_err(|err| log_failure("get_by_id", err))
    }

    /// Overwrite title, amount, note and tags of the row `id`.
    ///
    /// The id column is never written: the row keeps `id` and the returned
    /// expense carries it too, whatever `expense.id` held. The input is
    /// returned as given otherwise, without reading the row back. Updating an
    /// id that has no row is not an error.
    pub async fn update(&self, id: i64, expense: Expense) -> ResultStore<Expense> {
        self.overwrite(id, expense)
            .await
            .inspect_err(|err| log_failure("update", err))
    }

    /// Fetch every expense, ordered by id.
    ///
    /// Only a failing query is an error. A row that cannot be decoded is
    /// logged, skipped and counted in [`ExpenseList::dropped`].
    pub async fn list_all(&self) -> ResultStore<ExpenseList> {
        self.select_all()
            .await
            .inspect_err(|err| log_failure("list_all", err))
    }

    async fn insert(&self, mut expense: Expense) -> ResultStore<Expense> {
        let tags = self.tags.encode(&expense.tags)?;

        let mut insert = Query::insert();
        insert
            .into_table(Expenses::Table)
            .columns([
                Expenses::Title,
                Expenses::Amount,
                Expenses::Note,
                Expenses::Tags,
            ])
            .values([
                expense.title.as_str().into(),
                expense.amount.into(),
                expense.note.as_str().into(),
                tags.into(),
            ])
            .map_err(|err| DbErr::Custom(err.to_string()))?
            .returning_col(Expenses::Id);

        let row = self
            .database
            .query_one(self.backend.build(&insert))
            .await?
            .ok_or(DbErr::RecordNotInserted)?;

        expense.id = read_id(&row)?;
        tracing::debug!(id = expense.id, "expense created");
        Ok(expense)
    }

    async fn select_one(&self, id: i64) -> ResultStore<Expense> {
        let select = select_expenses()
            .and_where(Expr::col(Expenses::Id).eq(id))
            .to_owned();

        let row = self
            .database
            .query_one(self.backend.build(&select))
            .await?
            .ok_or(StoreError::NotFound(id))?;

        scan_expense(&row, self.tags).map_err(StoreError::Decode)
    }

    async fn overwrite(&self, id: i64, mut expense: Expense) -> ResultStore<Expense> {
        let tags = self.tags.encode(&expense.tags)?;

        let update = Query::update()
            .table(Expenses::Table)
            .values([
                (Expenses::Title, expense.title.as_str().into()),
                (Expenses::Amount, expense.amount.into()),
                (Expenses::Note, expense.note.as_str().into()),
                (Expenses::Tags, tags.into()),
            ])
            .and_where(Expr::col(Expenses::Id).eq(id))
            .to_owned();

        let result = self.database.execute(self.backend.build(&update)).await?;
        if result.rows_affected() == 0 {
            tracing::debug!(operation = "update", id, rows_affected = 0, "no expense matched");
        }

        if expense.id != id {
            tracing::debug!(
                operation = "update",
                id,
                payload_id = expense.id,
                "payload id ignored, row keeps its id"
            );
            expense.id = id;
        }
        Ok(expense)
    }

    async fn select_all(&self) -> ResultStore<ExpenseList> {
        let select = select_expenses()
            .order_by(Expenses::Id, Order::Asc)
            .to_owned();
        let rows = self.database.query_all(self.backend.build(&select)).await?;

        let mut list = ExpenseList {
            expenses: Vec::with_capacity(rows.len()),
            dropped: 0,
        };
        for (position, row) in rows.iter().enumerate() {
            match scan_expense(row, self.tags) {
                Ok(expense) => list.expenses.push(expense),
                Err(err) => {
                    tracing::warn!(
                        operation = "list_all",
                        position,
                        "dropping expense row that cannot be decoded: {err}"
                    );
                    list.dropped += 1;
                }
            }
        }

        Ok(list)
    }
}

fn select_expenses() -> SelectStatement {
    Query::select()
        .columns(COLUMNS)
        .from(Expenses::Table)
        .to_owned()
}
