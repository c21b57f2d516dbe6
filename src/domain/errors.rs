//! # Domain Errors
//!
//! Error types for domain-layer validation.
//!
//! These errors represent construction-time validation failures of value
//! objects and entities. Malformed promotion data is deliberately *not* an
//! error: promotions with unusable discount data are inert no-ops during
//! price resolution.

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A price value is negative or not representable.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A search query is missing a required field.
    #[error("invalid search query: {0}")]
    InvalidSearchQuery(String),
}

impl DomainError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid search query error.
    #[must_use]
    pub fn invalid_search_query(message: impl Into<String>) -> Self {
        Self::InvalidSearchQuery(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_price_display() {
        let err = DomainError::invalid_price("negative: -1");
        assert!(err.to_string().contains("invalid price"));
        assert!(err.to_string().contains("negative: -1"));
    }

    #[test]
    fn invalid_search_query_display() {
        let err = DomainError::invalid_search_query("origin is blank");
        assert!(err.to_string().contains("origin is blank"));
    }
}
