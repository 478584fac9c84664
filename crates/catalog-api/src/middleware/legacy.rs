//! Legacy failure responses
//!
//! Older clients expect a failure on the catalog routes to answer HTTP 200
//! with a fixed plain-text message; a delete always reports success. With
//! `ErrorStyle::Legacy` this middleware rewrites every non-success response
//! of those routes; other routes keep their typed errors.

use axum::{
    extract::{MatchedPath, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use catalog_common::ErrorStyle;
use catalog_service::PRODUCT_DELETED_MESSAGE;
use tracing::warn;

use crate::state::AppState;

/// Message sent for a failure of `method` on the route pattern `path`
#[must_use]
pub fn legacy_message(method: &Method, path: &str) -> Option<&'static str> {
    match (method, path) {
        (&Method::GET, "/products") => Some("데이터를 가져오지 못했습니다."),
        (&Method::POST, "/products") => Some("상품 업로드에 문제가 발생했습니다."),
        (&Method::GET, "/products/:id") => Some("상품조회에 문제가 생겼습니다."),
        (&Method::DELETE, "/products/:id") => Some(PRODUCT_DELETED_MESSAGE),
        (&Method::GET, "/banners") => Some("에러가 발생했습니다."),
        _ => None,
    }
}

/// Route-layer middleware applying the legacy failure contract
pub async fn legacy_failures(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.config().api.error_style != ErrorStyle::Legacy {
        return next.run(request).await;
    }

    let message = request
        .extensions()
        .get::<MatchedPath>()
        .and_then(|path| legacy_message(request.method(), path.as_str()));

    let response = next.run(request).await;

    match message {
        Some(message) if !response.status().is_success() => {
            warn!(status = %response.status(), "Request failed, sending legacy response");
            (StatusCode::OK, message).into_response()
        }
        _ => response,
    }
}
