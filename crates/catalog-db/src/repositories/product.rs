//! SQLite implementation of ProductRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use catalog_core::entities::{NewProduct, Product, ProductSummary};
use catalog_core::traits::{ProductRepository, RepoResult};
use catalog_core::value_objects::ProductId;

use crate::mappers::ProductInsert;
use crate::models::{ProductModel, ProductSummaryModel};

use super::error::map_db_error;

/// SQLite implementation of ProductRepository
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new SqliteProductRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<ProductSummary>> {
        let results = sqlx::query_as::<_, ProductSummaryModel>(
            r"
            SELECT id, name, price, seller, created_at, image_url
            FROM products
            ORDER BY created_at DESC, id DESC
            LIMIT ?1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ProductSummary::from).collect())
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn create(&self, product: &NewProduct) -> RepoResult<Product> {
        let insert = ProductInsert::new(product);

        let result = sqlx::query_as::<_, ProductModel>(
            r"
            INSERT INTO products (name, price, image_url, description, seller, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'), strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            RETURNING id, name, price, description, seller, image_url, created_at, updated_at
            ",
        )
        .bind(insert.name)
        .bind(insert.price)
        .bind(insert.image_url)
        .bind(insert.description)
        .bind(insert.seller)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Product::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, price, description, seller, image_url, created_at, updated_at
            FROM products
            WHERE id = ?1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = ?1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
