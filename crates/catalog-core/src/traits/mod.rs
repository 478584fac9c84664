//! Repository traits

mod repositories;

pub use repositories::{
    BannerRepository, ProductRepository, RepoResult, BANNER_LIST_LIMIT, PRODUCT_LIST_LIMIT,
};
