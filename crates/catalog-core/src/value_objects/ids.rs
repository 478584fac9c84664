//! Entity identifiers
//!
//! Both entities use store-generated integer keys. The newtypes keep a
//! product id from being passed where a banner id is expected and serialize
//! as plain JSON integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted product
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

/// Identifier of a persisted banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerId(i64);

/// Error when parsing an id from a path segment or string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl ProductId {
    /// Create a new ProductId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl BannerId {
    /// Create a new BannerId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| IdParseError::InvalidFormat)
    }
}

impl std::str::FromStr for BannerId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(BannerId)
            .map_err(|_| IdParseError::InvalidFormat)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl From<i64> for BannerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<BannerId> for i64 {
    fn from(id: BannerId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("abc".parse::<ProductId>(), Err(IdParseError::InvalidFormat));
        assert_eq!("".parse::<BannerId>(), Err(IdParseError::InvalidFormat));
        assert_eq!("1.5".parse::<ProductId>(), Err(IdParseError::InvalidFormat));
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: BannerId = serde_json::from_str("3").unwrap();
        assert_eq!(id, BannerId::new(3));
    }
}
