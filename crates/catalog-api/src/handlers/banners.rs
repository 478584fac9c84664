//! Banner handlers

use axum::{extract::State, Json};
use catalog_service::{BannerListResponse, BannerService};

use crate::response::ApiResult;
use crate::state::AppState;

/// List banners
///
/// GET /banners
pub async fn list_banners(State(state): State<AppState>) -> ApiResult<Json<BannerListResponse>> {
    let service = BannerService::new(state.service_context());
    let response = service.list_banners().await?;
    Ok(Json(response))
}
