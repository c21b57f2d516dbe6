//! # Application Layer
//!
//! Use-case orchestration over the domain and the source contract.

pub mod services;
