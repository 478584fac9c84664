//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Response types are
//! deserialized strictly so unexpected fields fail the test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create product request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub seller: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CreateProductRequest {
    /// The product used throughout the API documentation
    pub fn lamp() -> Self {
        Self {
            name: "Lamp".to_string(),
            description: "Warm light".to_string(),
            price: 1000,
            seller: "Acme".to_string(),
            image_url: Some("upload/lamp.png".to_string()),
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Item {suffix}"),
            description: format!("Test product {suffix}"),
            price: i64::try_from(suffix).unwrap_or(i64::MAX) * 10,
            seller: "Test Seller".to_string(),
            image_url: None,
        }
    }
}

/// Full product
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub seller: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductSummaryResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub seller: String,
    pub created_at: DateTime<Utc>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductListResponse {
    pub product: Vec<ProductSummaryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductResponse {
    pub result: ProductResponse,
}

#[derive(Debug, Deserialize)]
pub struct ProductDetailResponse {
    pub product: Option<ProductResponse>,
}

/// Banner
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BannerResponse {
    pub image_url: String,
    pub id: i64,
    pub href: String,
}

#[derive(Debug, Deserialize)]
pub struct BannerListResponse {
    pub banners: Vec<BannerResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    pub image_url: String,
}

/// Typed error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
