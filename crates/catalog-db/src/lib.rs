//! # catalog-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `catalog-core`. It handles:
//!
//! - Connection pool management
//! - Schema sync (creating missing tables at startup)
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{create_pool, sync_schema, DatabaseConfig, SqliteProductRepository};
//! use catalog_core::traits::ProductRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     sync_schema(&pool).await?;
//!     let products = SqliteProductRepository::new(pool);
//!
//!     let newest = products.list_recent(16).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, ping, DatabaseConfig, SqlitePool};
pub use repositories::{SqliteBannerRepository, SqliteProductRepository};
pub use schema::sync_schema;
