//! Banner service

use catalog_core::traits::BANNER_LIST_LIMIT;
use catalog_core::NewBanner;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{BannerListResponse, BannerResponse, CreateBannerRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Banner service
pub struct BannerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BannerService<'a> {
    /// Create a new BannerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the first banners in insertion order
    #[instrument(skip(self))]
    pub async fn list_banners(&self) -> ServiceResult<BannerListResponse> {
        let banners = self.ctx.banner_repo().list(BANNER_LIST_LIMIT).await?;

        Ok(BannerListResponse {
            banners: banners.into_iter().map(BannerResponse::from).collect(),
        })
    }

    /// Insert a banner (used for seeding; there is no HTTP route)
    #[instrument(skip(self, request))]
    pub async fn create_banner(&self, request: CreateBannerRequest) -> ServiceResult<BannerResponse> {
        request.validate()?;

        let banner = self.ctx.banner_repo().create(&NewBanner::from(request)).await?;

        info!(banner_id = %banner.id, "Banner created");

        Ok(BannerResponse::from(banner))
    }
}
