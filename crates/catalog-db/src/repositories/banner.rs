//! SQLite implementation of BannerRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use catalog_core::entities::{Banner, NewBanner};
use catalog_core::traits::{BannerRepository, RepoResult};

use crate::mappers::BannerInsert;
use crate::models::BannerModel;

use super::error::map_db_error;

/// SQLite implementation of BannerRepository
#[derive(Clone)]
pub struct SqliteBannerRepository {
    pool: SqlitePool,
}

impl SqliteBannerRepository {
    /// Create a new SqliteBannerRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannerRepository for SqliteBannerRepository {
    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> RepoResult<Vec<Banner>> {
        let results = sqlx::query_as::<_, BannerModel>(
            r"
            SELECT id, image_url, href
            FROM banners
            ORDER BY id ASC
            LIMIT ?1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Banner::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, banner: &NewBanner) -> RepoResult<Banner> {
        let insert = BannerInsert::new(banner, Utc::now());

        let result = sqlx::query_as::<_, BannerModel>(
            r"
            INSERT INTO banners (image_url, href, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, image_url, href
            ",
        )
        .bind(insert.image_url)
        .bind(insert.href)
        .bind(insert.created_at)
        .bind(insert.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Banner::from(result))
    }
}
