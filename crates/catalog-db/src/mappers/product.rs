//! Product entity <-> model mapper

use catalog_core::entities::{NewProduct, Product, ProductSummary};
use catalog_core::value_objects::ProductId;

use crate::models::{ProductModel, ProductSummaryModel};

/// Convert ProductModel to Product entity
impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: ProductId::new(model.id),
            name: model.name,
            price: model.price,
            description: model.description,
            seller: model.seller,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ProductSummaryModel to ProductSummary entity
impl From<ProductSummaryModel> for ProductSummary {
    fn from(model: ProductSummaryModel) -> Self {
        ProductSummary {
            id: ProductId::new(model.id),
            name: model.name,
            price: model.price,
            seller: model.seller,
            created_at: model.created_at,
            image_url: model.image_url,
        }
    }
}

/// Values bound when inserting a product
///
/// Timestamps are not bound: the insert statement stamps `created_at` and
/// `updated_at` itself, so creation order follows the order SQLite commits
/// the rows.
pub struct ProductInsert<'a> {
    pub name: &'a str,
    pub price: i64,
    pub image_url: Option<&'a str>,
    pub description: &'a str,
    pub seller: &'a str,
}

impl<'a> ProductInsert<'a> {
    pub fn new(product: &'a NewProduct) -> Self {
        Self {
            name: &product.name,
            price: product.price,
            image_url: product.image_url.as_deref(),
            description: &product.description,
            seller: &product.seller,
        }
    }
}
