//! # Identifier Value Objects
//!
//! Typed identifiers for sources and search runs.
//!
//! - [`SourceId`]: string identifier naming one configured data source
//! - [`SearchId`]: UUID correlating one aggregation run across log lines
//!   and diagnostics

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for a data source.
///
/// Sources are named by the integrator ("cleartrip", "goibibo", ...); the
/// engine treats the name as opaque.
///
/// # Examples
///
/// ```
/// use skyfare::domain::value_objects::SourceId;
///
/// let id = SourceId::new("cleartrip");
/// assert_eq!(id.as_str(), "cleartrip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Creates a new source identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier for one aggregation run.
///
/// Generated per [`search`](crate::FareAggregationEngine::search) call and
/// attached to the report and every log line the run emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchId(Uuid);

impl SearchId {
    /// Creates a new random search identifier.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn source_id_display() {
        let id = SourceId::new("cleartrip");
        assert_eq!(id.to_string(), "cleartrip");
    }

    #[test]
    fn source_id_equality() {
        assert_eq!(SourceId::new("a"), SourceId::from("a"));
        assert_ne!(SourceId::new("a"), SourceId::new("b"));
    }

    #[test]
    fn search_ids_are_unique() {
        assert_ne!(SearchId::new_v4(), SearchId::new_v4());
    }

    #[test]
    fn source_id_serde_transparent() {
        let id = SourceId::new("yatra");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"yatra\"");
    }
}
