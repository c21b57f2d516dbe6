//! # Source Registry
//!
//! Registration and lookup of configured source adapters.
//!
//! The engine fans out to whatever adapters the registry returns.
//! Registration order matters: it is the emission order used as the
//! tie-break when two fares resolve to the same best price.

use crate::domain::value_objects::SourceId;
use crate::infrastructure::sources::traits::SourceAdapter;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Trait for looking up the configured source adapters.
///
/// Implementations decide where the adapter list comes from (static
/// configuration, a control plane, feature flags); the engine only needs
/// the ordered list.
#[async_trait]
pub trait SourceRegistry: Send + Sync + fmt::Debug {
    /// Returns all configured adapters, in configured order.
    async fn sources(&self) -> Vec<Arc<dyn SourceAdapter>>;

    /// Returns the adapter with the given id, if configured.
    async fn get(&self, id: &SourceId) -> Option<Arc<dyn SourceAdapter>>;
}

/// A fixed, ordered set of source adapters.
///
/// The canonical registry for deployments where the source set is known
/// at startup.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use skyfare::infrastructure::sources::StaticSourceRegistry;
///
/// let registry = StaticSourceRegistry::new()
///     .register(Arc::new(CleartripAdapter::new()))
///     .register(Arc::new(GoibiboAdapter::new()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSourceRegistry {
    sources: Vec<Arc<dyn SourceAdapter>>,
}

impl StaticSourceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from an ordered adapter list.
    #[must_use]
    pub fn from_sources(sources: Vec<Arc<dyn SourceAdapter>>) -> Self {
        Self { sources }
    }

    /// Appends an adapter, preserving registration order.
    #[must_use]
    pub fn register(mut self, source: Arc<dyn SourceAdapter>) -> Self {
        self.sources.push(source);
        self
    }

    /// Returns the number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no adapters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[async_trait]
impl SourceRegistry for StaticSourceRegistry {
    async fn sources(&self) -> Vec<Arc<dyn SourceAdapter>> {
        self.sources.clone()
    }

    async fn get(&self, id: &SourceId) -> Option<Arc<dyn SourceAdapter>> {
        self.sources
            .iter()
            .find(|source| source.source_id() == id)
            .cloned()
    }
}
