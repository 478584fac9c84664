//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Field names are camelCase and ids are plain JSON integers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_core::value_objects::{BannerId, ProductId};

/// Plain-text body returned after a product delete, whether or not a row was removed
pub const PRODUCT_DELETED_MESSAGE: &str = "상품이 삭제되었습니다";

// ============================================================================
// Product Responses
// ============================================================================

/// Full product as returned by create and detail lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub seller: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Product as shown in the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryResponse {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub seller: String,
    pub created_at: DateTime<Utc>,
    pub image_url: Option<String>,
}

/// GET /products
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub product: Vec<ProductSummaryResponse>,
}

/// POST /products
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductResponse {
    pub result: ProductResponse,
}

/// GET /products/:id (`product` is null when the id is unknown)
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailResponse {
    pub product: Option<ProductResponse>,
}

// ============================================================================
// Banner Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub image_url: String,
    pub id: BannerId,
    pub href: String,
}

/// GET /banners
#[derive(Debug, Clone, Serialize)]
pub struct BannerListResponse {
    pub banners: Vec<BannerResponse>,
}

// ============================================================================
// Upload Responses
// ============================================================================

/// POST /image
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    /// `<upload dir name>/<storage key>`
    pub image_url: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
