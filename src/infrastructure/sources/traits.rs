//! # Source Adapter Trait
//!
//! Port definition for data source integrations.
//!
//! This module defines the [`SourceAdapter`] trait that every source
//! integration must implement. The aggregation engine depends only on this
//! contract, never on a concrete source; real adapters (browser automation,
//! HTTP scraping) live with the integrator.
//!
//! # Examples
//!
//! ```ignore
//! use skyfare::infrastructure::sources::{SourceAdapter, SourceResult};
//!
//! // Implement SourceAdapter for your source
//! struct MySourceAdapter { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl SourceAdapter for MySourceAdapter {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{Offering, Promotion};
use crate::domain::value_objects::{SearchQuery, SourceId};
use crate::infrastructure::sources::error::SourceResult;
use async_trait::async_trait;
use std::fmt;

/// Trait defining the capability contract for one data source.
///
/// # Contract
///
/// - `fetch_offerings` with zero matches returns `Ok(vec![])`, never an
///   error. Errors are reserved for connectivity, navigation, timeout,
///   and markup problems.
/// - `fetch_promotions` is independent of any specific search and may
///   legitimately return an empty list.
/// - No ordering is guaranteed between the two calls; the engine prices a
///   source's offerings only after both have completed.
/// - An adapter owns its exclusive resources (a browser session, a
///   connection) entirely within each call and must release them on every
///   exit path, success or failure, before returning.
///
/// # Error Handling
///
/// Methods return [`SourceResult<T>`]. Implementations map their
/// integration-specific failures to [`SourceError`](super::SourceError)
/// variants; the engine isolates any failure to this adapter alone.
#[async_trait]
pub trait SourceAdapter: Send + Sync + fmt::Debug {
    /// Returns the source identifier.
    fn source_id(&self) -> &SourceId;

    /// Fetches offerings matching the query.
    ///
    /// # Arguments
    ///
    /// * `query` - The route and dates to search
    ///
    /// # Errors
    ///
    /// - `SourceError::Timeout` - the source did not respond in time
    /// - `SourceError::Connection` / `SourceError::Navigation` - the
    ///   source could not be reached
    /// - `SourceError::MarkupMismatch` / `SourceError::Parse` - results
    ///   were served but could not be extracted
    async fn fetch_offerings(&self, query: &SearchQuery) -> SourceResult<Vec<Offering>>;

    /// Fetches the source's currently published promotions.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`fetch_offerings`](Self::fetch_offerings).
    async fn fetch_promotions(&self) -> SourceResult<Vec<Promotion>>;
}
