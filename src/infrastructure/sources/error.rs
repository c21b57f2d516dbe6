//! # Source Errors
//!
//! Error types for source adapter operations.
//!
//! These represent the ways fetching from a live source can fail:
//! connectivity, navigation, timeouts, and markup drift. The aggregation
//! engine isolates every one of them to the adapter that raised it; they
//! never abort a search.
//!
//! # Examples
//!
//! ```
//! use skyfare::infrastructure::sources::SourceError;
//!
//! let error = SourceError::timeout("results pane did not load in 60000ms");
//! assert!(error.is_retryable());
//!
//! let error = SourceError::markup_mismatch("flight card selector matched nothing");
//! assert!(error.is_structural());
//! ```

use thiserror::Error;

/// Error type for source adapter operations.
///
/// Adapters map their integration-specific failures (browser automation,
/// HTTP, parsing) onto these variants so the engine and its diagnostics
/// can treat all sources uniformly.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The source did not respond within its time budget.
    #[error("source timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection failure.
    #[error("source connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Navigation to a source page failed.
    #[error("source navigation error: {message}")]
    Navigation {
        /// Error message.
        message: String,
        /// The URL that failed to load, if known.
        url: Option<String>,
    },

    /// The page loaded but its structure did not match the adapter's
    /// expectations.
    #[error("source markup mismatch: {message}")]
    MarkupMismatch {
        /// Error message.
        message: String,
        /// The selector that failed to match, if known.
        selector: Option<String>,
    },

    /// Extracted text could not be interpreted.
    #[error("source parse error: {message}")]
    Parse {
        /// Error message.
        message: String,
    },

    /// The source is throttling or blocking requests.
    #[error("source rate limited: {message}")]
    RateLimited {
        /// Error message.
        message: String,
        /// Retry-after hint in milliseconds, if the source supplied one.
        retry_after_ms: Option<u64>,
    },

    /// Internal adapter failure.
    #[error("source internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },

    /// Unknown or unclassified failure.
    #[error("source unknown error: {message}")]
    Unknown {
        /// Error message.
        message: String,
    },
}

impl SourceError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with the exceeded budget.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a navigation error.
    #[must_use]
    pub fn navigation(message: impl Into<String>) -> Self {
        Self::Navigation {
            message: message.into(),
            url: None,
        }
    }

    /// Creates a navigation error naming the URL that failed.
    #[must_use]
    pub fn navigation_with_url(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Navigation {
            message: message.into(),
            url: Some(url.into()),
        }
    }

    /// Creates a markup mismatch error.
    #[must_use]
    pub fn markup_mismatch(message: impl Into<String>) -> Self {
        Self::MarkupMismatch {
            message: message.into(),
            selector: None,
        }
    }

    /// Creates a markup mismatch error naming the failing selector.
    #[must_use]
    pub fn markup_mismatch_with_selector(
        message: impl Into<String>,
        selector: impl Into<String>,
    ) -> Self {
        Self::MarkupMismatch {
            message: message.into(),
            selector: Some(selector.into()),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after_ms: None,
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates an unknown error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns true if this error indicates the source changed its page
    /// structure and the adapter needs updating.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MarkupMismatch { .. } | Self::Parse { .. })
    }

    /// Returns the retry delay hint in milliseconds, if applicable.
    #[must_use]
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }
}

/// Result type for source adapter operations.
pub type SourceResult<T> = Result<T, SourceError>;
