//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in catalog-core.
//! Each repository handles database operations for a specific domain entity.

mod banner;
mod error;
mod product;

pub use banner::SqliteBannerRepository;
pub use product::SqliteProductRepository;
