//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method maps to exactly one statement
//! against the backing store.

use async_trait::async_trait;

use crate::entities::{Banner, NewBanner, NewProduct, Product, ProductSummary};
use crate::error::DomainError;
use crate::value_objects::ProductId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Maximum number of products returned by a listing
pub const PRODUCT_LIST_LIMIT: i64 = 16;

/// Maximum number of banners returned by a listing
pub const BANNER_LIST_LIMIT: i64 = 3;

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List the most recently created products, newest first
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<ProductSummary>>;

    /// Insert a product and return the persisted row
    async fn create(&self, product: &NewProduct) -> RepoResult<Product>;

    /// Find product by ID
    async fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>>;

    /// Delete product by ID, returning the number of rows removed
    async fn delete(&self, id: ProductId) -> RepoResult<u64>;
}

// ============================================================================
// Banner Repository
// ============================================================================

#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// List banners in insertion order
    async fn list(&self, limit: i64) -> RepoResult<Vec<Banner>>;

    /// Insert a banner and return the persisted row
    async fn create(&self, banner: &NewBanner) -> RepoResult<Banner>;
}
