//! Entity to model mappers
//!
//! This module provides conversions between domain entities (catalog-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod banner;
mod product;

pub use banner::BannerInsert;
pub use product::ProductInsert;
