//! Product entity - an item listed in the catalog

use chrono::{DateTime, Utc};

use crate::value_objects::ProductId;

/// Product entity as persisted, with every column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub seller: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of a product (no description, no update timestamp)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub seller: String,
    pub created_at: DateTime<Utc>,
    pub image_url: Option<String>,
}

/// Fields supplied by a client when listing a new product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub seller: String,
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Create a new product draft without an image
    pub fn new(name: String, description: String, price: i64, seller: String) -> Self {
        Self {
            name,
            description,
            price,
            seller,
            image_url: None,
        }
    }

    /// Attach an image path
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

impl Product {
    /// Check whether the stored fields match what the client submitted
    pub fn matches(&self, draft: &NewProduct) -> bool {
        self.name == draft.name
            && self.description == draft.description
            && self.price == draft.price
            && self.seller == draft.seller
            && self.image_url == draft.image_url
    }

    /// Project to the listing shape
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            seller: self.seller.clone(),
            created_at: self.created_at,
            image_url: self.image_url.clone(),
        }
    }
}
