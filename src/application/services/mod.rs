//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`FareAggregationEngine`]: concurrent fare collection and merging
//! - [`PriceResolver`]: pure best-price resolution over promotions

pub mod aggregation;
pub mod price_resolver;

pub use aggregation::{
    AggregatedFare, AggregationConfig, AggregationReport, FareAggregationEngine, SourceFailure,
};
pub use price_resolver::{PriceResolution, PriceResolver};
