//! # Domain Entities
//!
//! The normalized shapes every source adapter produces.
//!
//! ## Entities
//!
//! - [`Offering`]: one comparable flight result from one source
//! - [`Promotion`]: a discount rule scoped to one source, with
//!   [`DiscountKind`] classification of its raw label

pub mod offering;
pub mod promotion;

pub use offering::{DIRECT, Offering};
pub use promotion::{DiscountKind, Promotion, PromotionBuilder};
