//! Banner entity <-> model mapper

use chrono::{DateTime, Utc};

use catalog_core::entities::{Banner, NewBanner};
use catalog_core::value_objects::BannerId;

use crate::models::BannerModel;

/// Convert BannerModel to Banner entity
impl From<BannerModel> for Banner {
    fn from(model: BannerModel) -> Self {
        Banner {
            id: BannerId::new(model.id),
            image_url: model.image_url,
            href: model.href,
        }
    }
}

/// Values bound when inserting a banner
pub struct BannerInsert<'a> {
    pub image_url: &'a str,
    pub href: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> BannerInsert<'a> {
    pub fn new(banner: &'a NewBanner, now: DateTime<Utc>) -> Self {
        Self {
            image_url: &banner.image_url,
            href: &banner.href,
            created_at: now,
            updated_at: now,
        }
    }
}
