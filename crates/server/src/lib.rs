use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use expense_store::StoreError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod expenses;
mod server;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{Expense, ExpenseNew, ExpenseUpdate};
    }
}

/// Header set on `GET /expenses` when some rows could not be decoded.
pub const DROPPED_HEADER: &str = "x-expenses-dropped";

pub enum ServerError {
    /// The request itself is unusable: bad JSON, bad id. Never reaches the store.
    ClientInput(String),
    /// A single-record store operation failed.
    Store(StoreError),
    /// The list operation failed.
    Internal(StoreError),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn message_for_store_error(err: StoreError) -> String {
    if err.is_persistence() {
        tracing::error!("store error: {err}");
        return "bad request".to_string();
    }
    err.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::ClientInput(err) => (StatusCode::BAD_REQUEST, err),
            ServerError::Store(err) => (StatusCode::BAD_REQUEST, message_for_store_error(err)),
            ServerError::Internal(err) => {
                tracing::error!("store error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "something is wrong on our end, try again later".to_string(),
                )
            }
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::ClientInput(value.body_text())
    }
}
