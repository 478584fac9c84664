//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod banners;
pub mod health;
pub mod images;
pub mod products;
