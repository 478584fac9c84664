//! Banner database model

use sqlx::FromRow;

/// Database model for banners table (timestamps are stored but never read)
#[derive(Debug, Clone, FromRow)]
pub struct BannerModel {
    pub id: i64,
    pub image_url: String,
    pub href: String,
}
