use std::sync::Arc;

use expense_store::ExpenseStore;
use sea_orm::{DatabaseConnection, DbErr};
use server::ServerState;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tracker={level},server={level},expense_store={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let db = Arc::new(sea_orm::Database::connect(&settings.server.database_url).await?);
    tracing::info!("connected to database");

    let store = ExpenseStore::new(db.clone());
    if let Err(err) = store.ensure_schema().await {
        tracing::error!("refusing to start without the expenses table: {err}");
        drop(store);
        close(db).await?;
        return Err(err.into());
    }

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let state = ServerState::new(store).with_authorization(settings.server.authorization);
    let served = server::run_with_listener(state, listener, shutdown_signal()).await;
    if let Err(err) = &served {
        tracing::error!("server failed: {err}");
    }

    close(db).await?;
    served?;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn close(db: Arc<DatabaseConnection>) -> Result<(), DbErr> {
    match Arc::try_unwrap(db) {
        Ok(db) => db.close().await,
        Err(_) => {
            tracing::warn!("connection pool still shared, leaving it to drop");
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
