//! Banner entity - a promotional image linking somewhere

use crate::value_objects::BannerId;

/// Banner entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub image_url: String,
    pub href: String,
}

/// Fields for seeding a new banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBanner {
    pub image_url: String,
    pub href: String,
}

impl NewBanner {
    /// Create a new banner draft
    pub fn new(image_url: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            href: href.into(),
        }
    }
}
