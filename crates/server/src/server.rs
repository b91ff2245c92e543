use std::{future::Future, sync::Arc};

use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use expense_store::ExpenseStore;
use tower_http::trace::TraceLayer;

use crate::expenses;

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<ExpenseStore>,
    /// Exact `Authorization` header value required on every request. `None`
    /// leaves the API open.
    pub authorization: Option<Arc<str>>,
}

impl ServerState {
    pub fn new(store: ExpenseStore) -> Self {
        Self {
            store: Arc::new(store),
            authorization: None,
        }
    }

    pub fn with_authorization(mut self, authorization: Option<String>) -> Self {
        self.authorization = authorization.map(Arc::from);
        self
    }
}

async fn auth(State(state): State<ServerState>, request: Request, next: Next) -> Response {
    if let Some(expected) = state.authorization.as_deref() {
        let provided = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected) {
            tracing::debug!("rejecting request with missing or wrong authorization");
            return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        }
    }

    next.run(request).await
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/expenses", post(expenses::create).get(expenses::list))
        .route("/expenses/{id}", get(expenses::get).put(expenses::update))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on `listener` until `shutdown` resolves.
pub async fn run_with_listener<F>(
    state: ServerState,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
