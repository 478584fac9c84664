//! # catalog-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Banner, NewBanner, NewProduct, Product, ProductSummary};
pub use error::DomainError;
pub use traits::{
    BannerRepository, ProductRepository, RepoResult, BANNER_LIST_LIMIT, PRODUCT_LIST_LIMIT,
};
pub use value_objects::{BannerId, IdParseError, ProductId};
