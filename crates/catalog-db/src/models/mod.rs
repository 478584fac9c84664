//! Database models - SQLx-compatible structs for SQLite tables

mod banner;
mod product;

pub use banner::BannerModel;
pub use product::{ProductModel, ProductSummaryModel};
