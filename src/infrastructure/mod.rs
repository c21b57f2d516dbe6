//! # Infrastructure Layer
//!
//! Integration points with the outside world. The aggregation core ships
//! only the source adapter contract; concrete adapters are supplied by
//! integrators.

pub mod sources;
