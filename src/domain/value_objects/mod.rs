//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`SourceId`]: string identifier for a configured data source
//! - [`SearchId`]: UUID identifier for one aggregation run
//!
//! ## Numeric Types
//!
//! - [`Price`]: non-negative decimal price with checked arithmetic
//!
//! ## Request Types
//!
//! - [`SearchQuery`]: route and dates for one fare search
//!
//! ## Time
//!
//! - [`Timestamp`]: UTC timestamp for diagnostics

pub mod ids;
pub mod price;
pub mod search;
pub mod timestamp;

pub use ids::{SearchId, SourceId};
pub use price::Price;
pub use search::SearchQuery;
pub use timestamp::Timestamp;
