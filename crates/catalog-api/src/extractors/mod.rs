//! Axum extractors for request handling
//!
//! Custom extractors for typed path ids and validated JSON bodies.

mod path;
mod validated;

pub use path::IdPath;
pub use validated::ValidatedJson;
