//! # Price Value Object
//!
//! Non-negative decimal price with checked arithmetic.
//!
//! This module provides the [`Price`] type used for base fares, resolved
//! fares, and savings. Prices are currency-homogeneous within a single
//! search run; the currency itself is carried out-of-band by the caller.
//!
//! # Examples
//!
//! ```
//! use skyfare::domain::value_objects::Price;
//!
//! let base = Price::new(4500.0).unwrap();
//! let discount = Price::new(450.0).unwrap();
//!
//! assert_eq!(base.saturating_sub(discount), Price::new(4050.0).unwrap());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative price expressed as a decimal.
///
/// Wraps `rust_decimal::Decimal` so that fare arithmetic never loses cents
/// to binary floating point. All mutating arithmetic is checked; operations
/// that would produce a negative or unrepresentable value are rejected
/// rather than wrapped.
///
/// # Invariants
///
/// - The contained value is never negative.
///
/// # Examples
///
/// ```
/// use skyfare::domain::value_objects::Price;
///
/// let price = Price::new(1000.0).unwrap();
/// assert!(Price::new(-1.0).is_err());
/// assert!(price > Price::ZERO);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a price from an `f64`, validating that it is non-negative
    /// and representable.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the value is negative,
    /// not finite, or outside the decimal range.
    ///
    /// # Examples
    ///
    /// ```
    /// use skyfare::domain::value_objects::Price;
    ///
    /// let price = Price::new(4500.50).unwrap();
    /// assert_eq!(price.to_string(), "4500.5");
    /// ```
    pub fn new(value: f64) -> DomainResult<Self> {
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| DomainError::invalid_price(format!("not representable: {value}")))?;
        Self::from_decimal(decimal)
    }

    /// Creates a price from a `Decimal`, validating that it is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_price(format!("negative: {value}")));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Computes `percent` percent of this price.
    ///
    /// Returns `None` if `percent` is negative or the multiplication
    /// overflows the decimal range.
    ///
    /// # Examples
    ///
    /// ```
    /// use skyfare::domain::value_objects::Price;
    /// use rust_decimal::Decimal;
    ///
    /// let base = Price::new(1000.0).unwrap();
    /// let tenth = base.percentage(Decimal::new(10, 0)).unwrap();
    /// assert_eq!(tenth, Price::new(100.0).unwrap());
    /// ```
    #[must_use]
    pub fn percentage(&self, percent: Decimal) -> Option<Self> {
        if percent.is_sign_negative() {
            return None;
        }
        let amount = self
            .0
            .checked_mul(percent)?
            .checked_div(Decimal::ONE_HUNDRED)?;
        Some(Self(amount))
    }

    /// Subtracts another price, flooring the result at zero.
    ///
    /// A discount larger than the price yields [`Price::ZERO`] rather than
    /// a negative fare.
    ///
    /// # Examples
    ///
    /// ```
    /// use skyfare::domain::value_objects::Price;
    ///
    /// let base = Price::new(1000.0).unwrap();
    /// let discount = Price::new(1500.0).unwrap();
    /// assert_eq!(base.saturating_sub(discount), Price::ZERO);
    /// ```
    #[must_use]
    pub fn saturating_sub(&self, other: Self) -> Self {
        match self.0.checked_sub(other.0) {
            Some(diff) if !diff.is_sign_negative() => Self(diff),
            _ => Self::ZERO,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}
