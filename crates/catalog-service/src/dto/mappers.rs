//! Entity to DTO mappers
//!
//! Implements `From` conversions between domain entities and DTOs.

use catalog_core::entities::{Banner, NewBanner, NewProduct, Product, ProductSummary};

use super::requests::{CreateBannerRequest, CreateProductRequest};
use super::responses::{BannerResponse, ProductResponse, ProductSummaryResponse};

// ============================================================================
// Product Mappers
// ============================================================================

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        let draft = NewProduct::new(
            request.name,
            request.description,
            request.price,
            request.seller,
        );
        match request.image_url {
            Some(url) => draft.with_image_url(url),
            None => draft,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            seller: product.seller,
            image_url: product.image_url,
            created_at: product.created_at,
        }
    }
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(summary: ProductSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            price: summary.price,
            seller: summary.seller,
            created_at: summary.created_at,
            image_url: summary.image_url,
        }
    }
}

// ============================================================================
// Banner Mappers
// ============================================================================

impl From<CreateBannerRequest> for NewBanner {
    fn from(request: CreateBannerRequest) -> Self {
        NewBanner::new(request.image_url, request.href)
    }
}

impl From<Banner> for BannerResponse {
    fn from(banner: Banner) -> Self {
        Self {
            image_url: banner.image_url,
            id: banner.id,
            href: banner.href,
        }
    }
}
