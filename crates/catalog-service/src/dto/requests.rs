//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Length limits mirror the column sizes of the backing tables and count
//! characters, not bytes.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Product Requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 20, message = "Name must be 1-20 characters"))]
    pub name: String,

    #[validate(length(max = 300, message = "Description must be at most 300 characters"))]
    pub description: String,

    pub price: i64,

    #[validate(length(min = 1, max = 30, message = "Seller must be 1-30 characters"))]
    pub seller: String,

    /// Path returned by a previous image upload
    #[validate(length(max = 300, message = "Image URL must be at most 300 characters"))]
    #[serde(default)]
    pub image_url: Option<String>,
}

// ============================================================================
// Banner Requests
// ============================================================================

/// Create banner request (seeding only, no HTTP route)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBannerRequest {
    #[validate(length(min = 1, max = 300, message = "Image URL must be 1-300 characters"))]
    pub image_url: String,

    #[validate(length(min = 1, max = 200, message = "Href must be 1-200 characters"))]
    pub href: String,
}
