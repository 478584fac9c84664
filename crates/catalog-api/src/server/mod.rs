//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::future::IntoFuture;

use axum::Router;
use catalog_common::{AppConfig, AppError};
use catalog_db::{create_lazy_pool, sync_schema, SqlitePool};
use catalog_service::{ServiceContextBuilder, UploadStore};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state);
    let router = apply_middleware(router, &state.config().cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// No database connection is opened here; the pool connects on first use.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create upload directory
    let upload_store = UploadStore::from_config(&config.storage);
    upload_store.ensure_root().await.map_err(|e| {
        AppError::Storage(format!(
            "Failed to create upload directory {}: {e}",
            upload_store.root().display()
        ))
    })?;
    info!(path = %upload_store.root().display(), "Upload directory ready");

    // Create database pool
    let db_config =
        catalog_db::DatabaseConfig::new(config.database.url.clone(), config.database.max_connections);
    let pool = create_lazy_pool(&db_config).map_err(|e| AppError::Database(e.to_string()))?;

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .upload_store(upload_store)
        .build()
        .map_err(AppError::internal)?;

    Ok(AppState::new(service_context, config))
}

/// Serve requests on `listener` while the schema is synchronized
///
/// Requests are accepted as soon as this is called. A failed schema sync
/// ends serving with `AppError::Bootstrap`.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    let pool = state.service_context().pool().clone();
    let app = create_app(state);

    tokio::select! {
        result = axum::serve(listener, app).into_future() => result.map_err(AppError::server),
        err = schema_sync(pool) => Err(err),
    }
}

/// Resolves only if the schema sync fails
async fn schema_sync(pool: SqlitePool) -> AppError {
    match sync_schema(&pool).await {
        Ok(()) => std::future::pending().await,
        Err(e) => {
            error!(error = %e, "Schema sync failed");
            AppError::bootstrap(e)
        }
    }
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Bind listener
    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {addr}: {e}")))?;
    info!("Server listening on http://{}", addr);

    serve(listener, state).await
}
