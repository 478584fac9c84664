//! Product service
//!
//! Handles listing, creation, lookup and deletion of catalog products.

use catalog_core::traits::PRODUCT_LIST_LIMIT;
use catalog_core::value_objects::ProductId;
use catalog_core::NewProduct;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    CreateProductRequest, CreateProductResponse, ProductDetailResponse, ProductListResponse,
    ProductResponse, ProductSummaryResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the newest products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ServiceResult<ProductListResponse> {
        let products = self.ctx.product_repo().list_recent(PRODUCT_LIST_LIMIT).await?;

        Ok(ProductListResponse {
            product: products
                .into_iter()
                .map(ProductSummaryResponse::from)
                .collect(),
        })
    }

    /// Create a new product
    #[instrument(skip(self, request))]
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> ServiceResult<CreateProductResponse> {
        request.validate()?;

        let draft = NewProduct::from(request);
        let product = self.ctx.product_repo().create(&draft).await?;

        info!(product_id = %product.id, "Product created");

        Ok(CreateProductResponse {
            result: ProductResponse::from(product),
        })
    }

    /// Get product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: ProductId) -> ServiceResult<ProductDetailResponse> {
        let product = self.ctx.product_repo().find_by_id(product_id).await?;

        Ok(ProductDetailResponse {
            product: product.map(ProductResponse::from),
        })
    }

    /// Delete product by ID, returning how many rows were removed
    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: ProductId) -> ServiceResult<u64> {
        let removed = self.ctx.product_repo().delete(product_id).await?;

        info!(product_id = %product_id, removed, "Product delete handled");

        Ok(removed)
    }
}
