//! Route definitions
//!
//! Catalog routes, static upload serving and health checks.

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{banners, health, images, products};
use crate::middleware::legacy_failures;
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(state: &AppState) -> Router<AppState> {
    let storage = &state.config().storage;

    Router::new()
        .merge(catalog_routes(state))
        .merge(image_routes(storage.max_upload_bytes()))
        .merge(health_routes())
        .nest_service(
            &format!("/{}", storage.public_prefix()),
            ServeDir::new(&storage.upload_dir),
        )
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Product and banner routes, wrapped by the legacy failure contract
fn catalog_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product).delete(products::delete_product),
        )
        .route("/banners", get(banners::list_banners))
        .route_layer(from_fn_with_state(state.clone(), legacy_failures))
}

/// Image upload route with its own body limit
fn image_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/image",
        post(images::upload_image).layer(DefaultBodyLimit::max(max_upload_bytes)),
    )
}
