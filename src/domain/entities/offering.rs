//! # Offering Entity
//!
//! One normalized, comparable result from a data source.
//!
//! An [`Offering`] is the common shape every source adapter normalizes its
//! raw results into: carrier, identifying code, schedule, and a base price.
//! Times and duration are kept as the display strings the source published;
//! the aggregation core compares offerings by price only.
//!
//! # Examples
//!
//! ```
//! use skyfare::domain::entities::Offering;
//! use skyfare::domain::value_objects::Price;
//!
//! let offering = Offering::new(
//!     "IndiGo",
//!     "6E-204",
//!     "06:30",
//!     "08:45",
//!     "2h 15m",
//!     Price::new(4500.0).unwrap(),
//! );
//!
//! assert_eq!(offering.stops(), "Direct");
//! ```

use crate::domain::value_objects::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stops descriptor used when a source reports no stop information.
pub const DIRECT: &str = "Direct";

/// One comparable flight result from one source.
///
/// Immutable once produced by an adapter. The source identity is attached
/// at aggregation time, on the result row, not on the offering itself.
///
/// # Invariants
///
/// - `base_price` is non-negative (enforced by [`Price`])
/// - Prices are currency-homogeneous within a single search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    /// Carrier or operator name.
    carrier: String,
    /// Identifying code (flight number).
    code: String,
    /// Departure time, as published by the source.
    departure_time: String,
    /// Arrival time, as published by the source.
    arrival_time: String,
    /// Journey duration, as published by the source.
    duration: String,
    /// Base price before any promotion.
    base_price: Price,
    /// Stop descriptor ("Direct", "1 stop", ...).
    stops: String,
}

impl Offering {
    /// Creates a new offering with the [`DIRECT`] stops sentinel.
    #[must_use]
    pub fn new(
        carrier: impl Into<String>,
        code: impl Into<String>,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
        duration: impl Into<String>,
        base_price: Price,
    ) -> Self {
        Self {
            carrier: carrier.into(),
            code: code.into(),
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
            duration: duration.into(),
            base_price,
            stops: DIRECT.to_string(),
        }
    }

    /// Sets the stops descriptor.
    #[must_use]
    pub fn with_stops(mut self, stops: impl Into<String>) -> Self {
        self.stops = stops.into();
        self
    }

    /// Returns the carrier name.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    /// Returns the identifying code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the departure time.
    #[inline]
    #[must_use]
    pub fn departure_time(&self) -> &str {
        &self.departure_time
    }

    /// Returns the arrival time.
    #[inline]
    #[must_use]
    pub fn arrival_time(&self) -> &str {
        &self.arrival_time
    }

    /// Returns the journey duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Returns the base price before any promotion.
    #[inline]
    #[must_use]
    pub fn base_price(&self) -> Price {
        self.base_price
    }

    /// Returns the stops descriptor.
    #[inline]
    #[must_use]
    pub fn stops(&self) -> &str {
        &self.stops
    }

    /// Returns true if the source reported no intermediate stops.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.stops == DIRECT
    }
}

impl fmt::Display for Offering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}-{} @ {}",
            self.carrier, self.code, self.departure_time, self.arrival_time, self.base_price
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_offering() -> Offering {
        Offering::new(
            "IndiGo",
            "6E-204",
            "06:30",
            "08:45",
            "2h 15m",
            Price::new(4500.0).unwrap(),
        )
    }

    #[test]
    fn new_defaults_to_direct() {
        let offering = test_offering();
        assert_eq!(offering.stops(), DIRECT);
        assert!(offering.is_direct());
    }

    #[test]
    fn with_stops_overrides_sentinel() {
        let offering = test_offering().with_stops("1 stop");
        assert_eq!(offering.stops(), "1 stop");
        assert!(!offering.is_direct());
    }

    #[test]
    fn accessors() {
        let offering = test_offering();
        assert_eq!(offering.carrier(), "IndiGo");
        assert_eq!(offering.code(), "6E-204");
        assert_eq!(offering.departure_time(), "06:30");
        assert_eq!(offering.arrival_time(), "08:45");
        assert_eq!(offering.duration(), "2h 15m");
        assert_eq!(offering.base_price(), Price::new(4500.0).unwrap());
    }

    #[test]
    fn display_format() {
        let display = test_offering().to_string();
        assert!(display.contains("IndiGo"));
        assert!(display.contains("6E-204"));
        assert!(display.contains("4500"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(test_offering()).unwrap();
        assert!(json.get("departureTime").is_some());
        assert!(json.get("arrivalTime").is_some());
        assert!(json.get("basePrice").is_some());
        assert_eq!(json["stops"], "Direct");
    }
}
