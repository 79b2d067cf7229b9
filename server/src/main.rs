//! Bookshelf server: loads settings, ensures the database and schema exist, serves the book API.
//!
//! Run from repo root: `cargo run -p bookshelf-server`

use bookshelf::{
    applied_migrations, apply_migrations, ensure_database_exists, router, telemetry, AppState,
    PgBookStore, Settings,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init("bookshelf=info,tower_http=info");

    let settings = Settings::load()?;
    let connect_options = settings.database.connect_options()?;
    ensure_database_exists(&connect_options).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect_with(connect_options)
        .await?;

    let newly_applied = apply_migrations(&pool).await?;
    let schema_version = applied_migrations(&pool)
        .await?
        .last()
        .map(|m| m.version)
        .unwrap_or(0);
    tracing::info!(schema_version, newly_applied = ?newly_applied, "database ready");

    let store = PgBookStore::new(pool);
    let state = AppState::new(Arc::new(store.clone()), settings.server.request_timeout);
    let app = router(state);

    let listener = TcpListener::bind(settings.server.addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.pool().close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
