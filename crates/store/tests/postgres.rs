//! Statement shape on Postgres, where tags live in a native `TEXT[]`.
use std::{collections::BTreeMap, sync::Arc};

use sea_orm::{DatabaseConnection, DbBackend, MockDatabase, MockExecResult, Transaction, Value};

use expense_store::{Expense, ExpenseStore, StoreError};

fn lunch() -> Expense {
    Expense::new(
        "hi",
        1.4,
        "some note",
        vec!["tag1".to_string(), "tag2".to_string()],
    )
}

fn tags_value() -> Value {
    Value::from(vec!["tag1".to_string(), "tag2".to_string()])
}

/// Drops the store first so the mock connection is the last owner.
fn transaction_log(store: ExpenseStore, db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    drop(store);
    Arc::try_unwrap(db).unwrap().into_transaction_log()
}

#[tokio::test]
async fn create_binds_tags_as_text_array() {
    let db = Arc::new(
        MockDatabase::new(DbBackend::Postgres)
            .append_query_results([[BTreeMap::from([("id", Value::from(1i64))])]])
            .into_connection(),
    );
    let store = ExpenseStore::new(db.clone());

    let created = store
        .create(Expense {
            id: 500,
            ..lunch()
        })
        .await
        .unwrap();
    assert_eq!(created, Expense { id: 1, ..lunch() });

    assert_eq!(
        transaction_log(store, db),
        vec![Transaction::from_sql_and_values(
            DbBackend::Postgres,
            r#"INSERT INTO "expenses" ("title", "amount", "note", "tags") VALUES ($1, $2, $3, $4) RETURNING "id""#,
            [
                "hi".into(),
                1.4f64.into(),
                "some note".into(),
                tags_value(),
            ],
        )]
    );
}

#[tokio::test]
async fn get_by_id_decodes_text_array() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([[BTreeMap::from([
            ("id", Value::from(5i64)),
            ("title", Value::from("hi")),
            ("amount", Value::from(1.4f64)),
            ("note", Value::from("some note")),
            ("tags", tags_value()),
        ])]])
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();
    let store = ExpenseStore::new(db);

    assert_eq!(store.get_by_id(5).await.unwrap(), Expense { id: 5, ..lunch() });
    assert_eq!(store.get_by_id(6).await, Err(StoreError::NotFound(6)));
}

#[tokio::test]
async fn update_never_writes_id_column() {
    let db = Arc::new(
        MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection(),
    );
    let store = ExpenseStore::new(db.clone());

    let updated = store
        .update(
            3,
            Expense {
                id: 9,
                ..lunch()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated, Expense { id: 3, ..lunch() });

    assert_eq!(
        transaction_log(store, db),
        vec![Transaction::from_sql_and_values(
            DbBackend::Postgres,
            r#"UPDATE "expenses" SET "title" = $1, "amount" = $2, "note" = $3, "tags" = $4 WHERE "id" = $5"#,
            [
                "hi".into(),
                1.4f64.into(),
                "some note".into(),
                tags_value(),
                3i64.into(),
            ],
        )]
    );
}

// Tables left by older deployments carry a `SERIAL` (INT4) id.
#[tokio::test]
async fn int4_id_column_is_widened() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_query_results([[BTreeMap::from([("id", Value::from(2i32))])]])
        .append_query_results([[BTreeMap::from([
            ("id", Value::from(2i32)),
            ("title", Value::from("hi")),
            ("amount", Value::from(1.4f64)),
            ("note", Value::from("some note")),
            ("tags", tags_value()),
        ])]])
        .into_connection();
    let store = ExpenseStore::new(db);

    let created = store.create(lunch()).await.unwrap();
    assert_eq!(created.id, 2);

    let list = store.list_all().await.unwrap();
    assert_eq!(list.dropped, 0);
    assert_eq!(list.expenses, vec![Expense { id: 2, ..lunch() }]);
}
