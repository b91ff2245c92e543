//! Expenses API endpoints

use api_types::expense::{Expense, ExpenseNew, ExpenseUpdate};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{DROPPED_HEADER, ServerError, server::ServerState};

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::ClientInput("invalid expense id".to_string()))
}

fn map_expense(expense: expense_store::Expense) -> Expense {
    Expense {
        id: expense.id,
        title: expense.title,
        amount: expense.amount,
        note: expense.note,
        tags: expense.tags,
    }
}

/// Handle requests for creating a new expense
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ServerError> {
    let Json(payload) = payload?;

    let created = state
        .store
        .create(expense_store::Expense::new(
            payload.title,
            payload.amount,
            payload.note,
            payload.tags,
        ))
        .await
        .map_err(ServerError::Store)?;

    Ok((StatusCode::CREATED, Json(map_expense(created))))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Expense>, ServerError> {
    let id = parse_id(&id)?;

    let expense = state
        .store
        .get_by_id(id)
        .await
        .map_err(ServerError::Store)?;

    Ok(Json(map_expense(expense)))
}

/// Handle requests for overwriting an expense.
///
/// The path names the row. A body `id` is optional but must agree with it.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Result<Json<Expense>, ServerError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;

    if let Some(payload_id) = payload.id.filter(|payload_id| *payload_id != id) {
        return Err(ServerError::ClientInput(format!(
            "body id {payload_id} does not match path id {id}"
        )));
    }

    let updated = state
        .store
        .update(
            id,
            expense_store::Expense {
                id,
                title: payload.title,
                amount: payload.amount,
                note: payload.note,
                tags: payload.tags,
            },
        )
        .await
        .map_err(ServerError::Store)?;

    Ok(Json(map_expense(updated)))
}

pub async fn list(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let list = state
        .store
        .list_all()
        .await
        .map_err(ServerError::Internal)?;

    let dropped = list.dropped;
    let body = Json(list.expenses.into_iter().map(map_expense).collect::<Vec<_>>());

    if dropped > 0 {
        tracing::warn!(dropped, "listing expenses without undecodable rows");
        return Ok(([(DROPPED_HEADER, dropped.to_string())], body).into_response());
    }
    Ok(body.into_response())
}
