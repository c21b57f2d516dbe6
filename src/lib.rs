//! Skyfare aggregates comparable flight fares across heterogeneous data
//! sources.
//!
//! Overview
//! - Fans out concurrently to every configured [`SourceAdapter`], one task
//!   per source, joined at a single barrier.
//! - Isolates each source's failures: a broken source contributes zero
//!   fares and one diagnostic record, never an aborted search.
//! - Normalizes every source's results into the common [`Offering`] shape
//!   and resolves each offering's best effective price against that
//!   source's [`Promotion`] list.
//! - Merges everything into one [`AggregationReport`] sorted ascending by
//!   best price, with configured-order emission as the tie-break.
//!
//! The crate is the aggregation core only. Retrieving raw source data
//! (browser automation, scraping) is the integrator's job, modeled by the
//! [`SourceAdapter`] capability contract; the HTTP surface that exposes
//! search as an endpoint lives with the caller.
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use skyfare::{FareAggregationEngine, SearchQuery, StaticSourceRegistry};
//!
//! let registry = StaticSourceRegistry::new()
//!     .register(Arc::new(CleartripAdapter::new()))
//!     .register(Arc::new(GoibiboAdapter::new()));
//!
//! let engine = FareAggregationEngine::with_defaults(Arc::new(registry));
//! let query = SearchQuery::new("DEL", "BOM", "2026-09-01")?;
//! let report = engine.search(&query).await;
//!
//! for fare in report.fares() {
//!     println!("{}: {}", fare.source(), fare.price_resolution().best_price());
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::{
    AggregatedFare, AggregationConfig, AggregationReport, FareAggregationEngine, PriceResolution,
    PriceResolver, SourceFailure,
};
pub use domain::entities::{DiscountKind, Offering, Promotion, PromotionBuilder};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::value_objects::{Price, SearchId, SearchQuery, SourceId, Timestamp};
pub use infrastructure::sources::{
    SourceAdapter, SourceError, SourceRegistry, SourceResult, StaticSourceRegistry,
};
