//! Product handlers
//!
//! Endpoints for listing, creating, reading and deleting products.

use axum::{extract::State, Json};
use catalog_core::ProductId;
use catalog_service::{
    CreateProductRequest, CreateProductResponse, ProductDetailResponse, ProductListResponse,
    ProductService, PRODUCT_DELETED_MESSAGE,
};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List the newest products
///
/// GET /products
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<ProductListResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service.list_products().await?;
    Ok(Json(response))
}

/// Create a new product
///
/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Json<CreateProductResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service.create_product(request).await?;
    Ok(Json(response))
}

/// Get product by ID
///
/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(product_id): IdPath<ProductId>,
) -> ApiResult<Json<ProductDetailResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service.get_product(product_id).await?;
    Ok(Json(response))
}

/// Delete product by ID
///
/// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(product_id): IdPath<ProductId>,
) -> ApiResult<&'static str> {
    let service = ProductService::new(state.service_context());
    service.delete_product(product_id).await?;
    Ok(PRODUCT_DELETED_MESSAGE)
}
