//! Path parameter extractors
//!
//! Type-safe extraction of numeric ids from path parameters.

use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Extract a single id from the route's only path parameter
///
/// The raw segment is parsed with `T::from_str`, so `/products/abc` is
/// rejected as an invalid path instead of reaching the store.
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: FromStr + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        let id = raw
            .parse()
            .map_err(|_| ApiError::invalid_path(format!("Invalid id format: {raw}")))?;

        Ok(IdPath(id))
    }
}
