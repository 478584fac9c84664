//! Service context - dependency container for services
//!
//! Holds the repositories, the upload store and the pool they share.

use std::sync::Arc;

use catalog_core::traits::{BannerRepository, ProductRepository};
use catalog_db::{SqliteBannerRepository, SqlitePool, SqliteProductRepository};

use super::error::{ServiceError, ServiceResult};
use super::upload::UploadStore;

/// Service context containing all dependencies
///
/// Built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Repositories
    product_repo: Arc<dyn ProductRepository>,
    banner_repo: Arc<dyn BannerRepository>,

    // Uploads
    upload_store: UploadStore,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        product_repo: Arc<dyn ProductRepository>,
        banner_repo: Arc<dyn BannerRepository>,
        upload_store: UploadStore,
    ) -> Self {
        Self {
            pool,
            product_repo,
            banner_repo,
            upload_store,
        }
    }

    /// Create a context backed by the SQLite repositories over `pool`
    pub fn sqlite(pool: SqlitePool, upload_store: UploadStore) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(SqliteProductRepository::new(pool.clone())),
            Arc::new(SqliteBannerRepository::new(pool)),
            upload_store,
        )
    }

    // === Database Pool ===

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Repositories ===

    /// Get the product repository
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    /// Get the banner repository
    pub fn banner_repo(&self) -> &dyn BannerRepository {
        self.banner_repo.as_ref()
    }

    // === Uploads ===

    /// Get the upload store
    pub fn upload_store(&self) -> &UploadStore {
        &self.upload_store
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .field("upload_store", &self.upload_store)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Repositories that are not supplied default to the SQLite implementations
/// over the configured pool.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    banner_repo: Option<Arc<dyn BannerRepository>>,
    upload_store: Option<UploadStore>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = Some(repo);
        self
    }

    pub fn banner_repo(mut self, repo: Arc<dyn BannerRepository>) -> Self {
        self.banner_repo = Some(repo);
        self
    }

    pub fn upload_store(mut self, store: UploadStore) -> Self {
        self.upload_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the pool or upload store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::internal("pool is required"))?;
        let upload_store = self
            .upload_store
            .ok_or_else(|| ServiceError::internal("upload_store is required"))?;

        let product_repo = self
            .product_repo
            .unwrap_or_else(|| Arc::new(SqliteProductRepository::new(pool.clone())));
        let banner_repo = self
            .banner_repo
            .unwrap_or_else(|| Arc::new(SqliteBannerRepository::new(pool.clone())));

        Ok(ServiceContext::new(pool, product_repo, banner_repo, upload_store))
    }
}

/// Context over a fresh in-memory database with the schema applied
#[cfg(test)]
pub(crate) async fn test_context(upload_root: &std::path::Path) -> ServiceContext {
    use catalog_common::UploadNaming;
    use catalog_db::{create_pool, sync_schema, DatabaseConfig};

    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    sync_schema(&pool).await.unwrap();
    ServiceContext::sqlite(pool, UploadStore::new(upload_root, "upload", UploadNaming::Generated))
}
