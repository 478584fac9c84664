//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod banner;
pub mod context;
pub mod error;
pub mod product;
pub mod upload;

// Re-export all services for convenience
pub use banner::BannerService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use product::ProductService;
pub use upload::{UploadService, UploadStore};
