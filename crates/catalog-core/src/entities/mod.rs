//! Domain entities - core business objects

mod banner;
mod product;

pub use banner::{Banner, NewBanner};
pub use product::{NewProduct, Product, ProductSummary};
