//! # Search Query Value Object
//!
//! The route and dates for one fare search.
//!
//! Dates are carried as the display strings the front end collected; date
//! validation and formatting are the front end's responsibility, not the
//! aggregation core's.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fare search request: origin, destination, and travel dates.
///
/// A query without a return date is a one-way search.
///
/// # Examples
///
/// ```
/// use skyfare::domain::value_objects::SearchQuery;
///
/// let one_way = SearchQuery::new("DEL", "BOM", "2026-09-01").unwrap();
/// assert!(!one_way.is_round_trip());
///
/// let round_trip = one_way.with_return_date("2026-09-08");
/// assert!(round_trip.is_round_trip());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Origin location code.
    origin: String,
    /// Destination location code.
    destination: String,
    /// Outbound travel date, as supplied by the caller.
    depart_date: String,
    /// Optional return travel date; absent for one-way searches.
    return_date: Option<String>,
}

impl SearchQuery {
    /// Creates a one-way search query.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSearchQuery`] if origin, destination,
    /// or departure date is blank.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        depart_date: impl Into<String>,
    ) -> DomainResult<Self> {
        let origin = origin.into();
        let destination = destination.into();
        let depart_date = depart_date.into();

        if origin.trim().is_empty() {
            return Err(DomainError::invalid_search_query("origin is blank"));
        }
        if destination.trim().is_empty() {
            return Err(DomainError::invalid_search_query("destination is blank"));
        }
        if depart_date.trim().is_empty() {
            return Err(DomainError::invalid_search_query("departure date is blank"));
        }

        Ok(Self {
            origin,
            destination,
            depart_date,
            return_date: None,
        })
    }

    /// Adds a return date, turning this into a round-trip search.
    #[must_use]
    pub fn with_return_date(mut self, return_date: impl Into<String>) -> Self {
        self.return_date = Some(return_date.into());
        self
    }

    /// Returns the origin location code.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the destination location code.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the outbound travel date.
    #[inline]
    #[must_use]
    pub fn depart_date(&self) -> &str {
        &self.depart_date
    }

    /// Returns the return travel date, if any.
    #[inline]
    #[must_use]
    pub fn return_date(&self) -> Option<&str> {
        self.return_date.as_deref()
    }

    /// Returns true if this is a round-trip search.
    #[inline]
    #[must_use]
    pub fn is_round_trip(&self) -> bool {
        self.return_date.is_some()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {}", self.origin, self.destination, self.depart_date)?;
        if let Some(return_date) = &self.return_date {
            write!(f, " ({return_date})")?;
        }
        Ok(())
    }
}
