//! # catalog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    BannerService, ProductService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UploadService, UploadStore,
};
