//! # Source Integrations
//!
//! The capability contract between the aggregation engine and the data
//! sources it fans out to.
//!
//! - [`SourceAdapter`]: the per-source capability contract
//! - [`SourceRegistry`] / [`StaticSourceRegistry`]: the configured,
//!   ordered adapter list
//! - [`SourceError`]: the failure taxonomy the engine isolates per source

pub mod error;
pub mod registry;
pub mod traits;

pub use error::{SourceError, SourceResult};
pub use registry::{SourceRegistry, StaticSourceRegistry};
pub use traits::SourceAdapter;
