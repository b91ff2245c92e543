//! Row decoding shared by every read path.
//!
//! `query_one` and `query_all` both hand back [`QueryResult`] rows, so a
//! single [`scan_expense`] keeps column names and types in one place for
//! `get_by_id` and `list_all`.
use sea_orm::{DbBackend, DbErr, QueryResult, Value};

use crate::Expense;

/// How the `tags` column is stored on a given backend.
///
/// Postgres has a native `TEXT[]`. Everything else gets the list as JSON in a
/// text column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TagsColumn {
    NativeArray,
    JsonText,
}

impl TagsColumn {
    pub(crate) fn for_backend(backend: DbBackend) -> Self {
        match backend {
            DbBackend::Postgres => Self::NativeArray,
            _ => Self::JsonText,
        }
    }

    pub(crate) fn encode(self, tags: &[String]) -> Result<Value, DbErr> {
        match self {
            Self::NativeArray => Ok(Value::from(tags.to_vec())),
            Self::JsonText => serde_json::to_string(tags)
                .map(Value::from)
                .map_err(|err| DbErr::Json(err.to_string())),
        }
    }

    /// Read the column back. NULL is an empty list.
    pub(crate) fn decode(self, row: &QueryResult, column: &str) -> Result<Vec<String>, DbErr> {
        match self {
            Self::NativeArray => row
                .try_get::<Option<Vec<String>>>("", column)
                .map(Option::unwrap_or_default),
            Self::JsonText => match row.try_get::<Option<String>>("", column)? {
                Some(raw) => serde_json::from_str(&raw).map_err(|err| {
                    DbErr::Type(format!("column `{column}` is not a list of text: {err}"))
                }),
                None => Ok(Vec::new()),
            },
        }
    }
}

/// Read the `id` column as `i64`.
///
/// Tables created by older deployments on Postgres keep a `SERIAL` (INT4) id,
/// which sqlx refuses to hand out as `i64`; those are read as `i32` and
/// widened.
pub(crate) fn read_id(row: &QueryResult) -> Result<i64, DbErr> {
    row.try_get::<i64>("", "id")
        .or_else(|wide| row.try_get::<i32>("", "id").map(i64::from).map_err(|_| wide))
}

/// Decode `(id, title, amount, note, tags)` from one row.
///
/// Every column is read before the entity is built: a row either decodes
/// completely or not at all.
pub(crate) fn scan_expense(row: &QueryResult, tags: TagsColumn) -> Result<Expense, DbErr> {
    let id = read_id(row)?;
    let title: String = row.try_get("", "title")?;
    let amount: f64 = row.try_get("", "amount")?;
    let note: String = row.try_get("", "note")?;
    let tags = tags.decode(row, "tags")?;

    Ok(Expense {
        id,
        title,
        amount,
        note,
        tags,
    })
}
