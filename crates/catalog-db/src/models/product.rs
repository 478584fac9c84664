//! Product database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub seller: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of the products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductSummaryModel {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub seller: String,
    pub created_at: DateTime<Utc>,
    pub image_url: Option<String>,
}
