//! # Fare Aggregation Engine
//!
//! Orchestrates concurrent fare collection across all configured sources.
//!
//! This module provides the [`FareAggregationEngine`] which fans out to
//! every registered [`SourceAdapter`], isolates per-source failures,
//! resolves each offering's best price against its source's promotions,
//! and merges everything into one price-sorted [`AggregationReport`].

use crate::application::services::price_resolver::{PriceResolution, PriceResolver};
use crate::domain::entities::{Offering, Promotion};
use crate::domain::value_objects::{SearchId, SearchQuery, SourceId, Timestamp};
use crate::infrastructure::sources::error::{SourceError, SourceResult};
use crate::infrastructure::sources::registry::SourceRegistry;
use crate::infrastructure::sources::traits::SourceAdapter;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Configuration for fare aggregation.
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    /// Uniform time budget for one source's whole unit of work
    /// (offerings and promotions), in milliseconds.
    pub source_timeout_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            source_timeout_ms: 60_000,
        }
    }
}

impl AggregationConfig {
    /// Sets the per-source time budget.
    #[must_use]
    pub fn with_source_timeout(mut self, timeout_ms: u64) -> Self {
        self.source_timeout_ms = timeout_ms;
        self
    }
}

/// One row of final output: an offering, its resolved price, and the
/// promotions of the source that produced it.
///
/// Immutable once created; the whole set is discarded with the report at
/// the end of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedFare {
    /// The source that produced the offering.
    source: SourceId,
    /// The normalized offering.
    offering: Offering,
    /// The resolved price for this offering.
    price_resolution: PriceResolution,
    /// The full promotion list of the source, or `None` when it had none.
    promotions: Option<Vec<Promotion>>,
}

impl AggregatedFare {
    fn new(
        source: SourceId,
        offering: Offering,
        price_resolution: PriceResolution,
        promotions: Option<Vec<Promotion>>,
    ) -> Self {
        Self {
            source,
            offering,
            price_resolution,
            promotions,
        }
    }

    /// Returns the source that produced the offering.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &SourceId {
        &self.source
    }

    /// Returns the normalized offering.
    #[inline]
    #[must_use]
    pub fn offering(&self) -> &Offering {
        &self.offering
    }

    /// Returns the resolved price for this offering.
    #[inline]
    #[must_use]
    pub fn price_resolution(&self) -> &PriceResolution {
        &self.price_resolution
    }

    /// Returns the source's promotion list, if it published any.
    #[inline]
    #[must_use]
    pub fn promotions(&self) -> Option<&[Promotion]> {
        self.promotions.as_deref()
    }
}

/// Record of one source's isolated failure during a search.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    /// The source that failed.
    source: SourceId,
    /// The error the source raised.
    error: SourceError,
    /// When the failure was recorded.
    failed_at: Timestamp,
}

impl SourceFailure {
    fn new(source: SourceId, error: SourceError) -> Self {
        Self {
            source,
            error,
            failed_at: Timestamp::now(),
        }
    }

    /// Returns the source that failed.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &SourceId {
        &self.source
    }

    /// Returns the error the source raised.
    #[inline]
    #[must_use]
    pub fn error(&self) -> &SourceError {
        &self.error
    }

    /// Returns when the failure was recorded.
    #[inline]
    #[must_use]
    pub fn failed_at(&self) -> Timestamp {
        self.failed_at
    }
}

/// Result of one aggregation run.
///
/// Always produced, even when every source failed: a search that finds
/// nothing is an empty report, not an error. The per-source failure
/// records let a caller distinguish "nothing was found" from "sources
/// errored".
#[derive(Debug)]
pub struct AggregationReport {
    /// Identifier correlating this run across logs and diagnostics.
    search_id: SearchId,
    /// All collected fares, sorted ascending by best price.
    fares: Vec<AggregatedFare>,
    /// Number of sources the engine fanned out to.
    sources_queried: usize,
    /// Per-source failures isolated during the run.
    failures: Vec<SourceFailure>,
}

impl AggregationReport {
    /// Returns the identifier of this run.
    #[inline]
    #[must_use]
    pub fn search_id(&self) -> SearchId {
        self.search_id
    }

    /// Returns all collected fares, sorted ascending by best price.
    #[inline]
    #[must_use]
    pub fn fares(&self) -> &[AggregatedFare] {
        &self.fares
    }

    /// Consumes the report, returning the sorted fares.
    #[must_use]
    pub fn into_fares(self) -> Vec<AggregatedFare> {
        self.fares
    }

    /// Returns the cheapest fare, if any was collected.
    #[must_use]
    pub fn best_fare(&self) -> Option<&AggregatedFare> {
        self.fares.first()
    }

    /// Returns the number of sources the engine fanned out to.
    #[inline]
    #[must_use]
    pub fn sources_queried(&self) -> usize {
        self.sources_queried
    }

    /// Returns the number of sources that settled without error.
    #[must_use]
    pub fn sources_responded(&self) -> usize {
        self.sources_queried - self.failures.len()
    }

    /// Returns the per-source failures isolated during the run.
    #[inline]
    #[must_use]
    pub fn failures(&self) -> &[SourceFailure] {
        &self.failures
    }

    /// Returns true if at least one source failed.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Engine for collecting and price-sorting fares from all configured
/// sources.
///
/// # Concurrency
///
/// Every source runs as its own task; within a task the source's
/// offerings and promotions are fetched concurrently and both must
/// complete before that source's offerings are priced. The engine awaits
/// a single barrier over all tasks. Sources share no mutable state, so
/// nothing here locks.
///
/// # Failure Isolation
///
/// A failing source (error, timeout, or panic) contributes zero fares and
/// one [`SourceFailure`] record; it never aborts the other sources or the
/// search itself. `search` has no failure path.
#[derive(Debug)]
pub struct FareAggregationEngine {
    registry: Arc<dyn SourceRegistry>,
    resolver: PriceResolver,
    config: AggregationConfig,
}

impl FareAggregationEngine {
    /// Creates a new engine over the given registry.
    #[must_use]
    pub fn new(registry: Arc<dyn SourceRegistry>, config: AggregationConfig) -> Self {
        Self {
            registry,
            resolver: PriceResolver::new(),
            config,
        }
    }

    /// Creates a new engine with the default configuration.
    #[must_use]
    pub fn with_defaults(registry: Arc<dyn SourceRegistry>) -> Self {
        Self::new(registry, AggregationConfig::default())
    }

    /// Searches all configured sources and returns one price-sorted
    /// report.
    ///
    /// Resolves only after every source has settled, successfully or not.
    /// Fares are sorted ascending by best price; equal prices keep their
    /// emission order, with sources processed in configured order.
    pub async fn search(&self, query: &SearchQuery) -> AggregationReport {
        let search_id = SearchId::new_v4();
        let sources = self.registry.sources().await;
        let sources_queried = sources.len();

        tracing::info!(
            search_id = %search_id,
            route = %query,
            sources = sources_queried,
            "starting fare search"
        );

        let budget_ms = self.config.source_timeout_ms;
        let budget = Duration::from_millis(budget_ms);
        let resolver = self.resolver;

        let mut source_ids = Vec::with_capacity(sources.len());
        let mut handles = Vec::with_capacity(sources.len());
        for source in sources {
            source_ids.push(source.source_id().clone());
            let query = query.clone();
            handles.push(tokio::spawn(async move {
                match timeout(budget, collect_source(source, &query, resolver)).await {
                    Ok(result) => result,
                    Err(_) => Err(SourceError::timeout_with_duration(
                        "source did not settle within the search budget",
                        budget_ms,
                    )),
                }
            }));
        }

        // Single barrier: every source settles, success or failure,
        // before any result is merged.
        let settled = join_all(handles).await;

        let mut fares = Vec::new();
        let mut failures = Vec::new();
        for (source_id, joined) in source_ids.into_iter().zip(settled) {
            match joined {
                Ok(Ok(mut source_fares)) => {
                    tracing::debug!(
                        search_id = %search_id,
                        source = %source_id,
                        fares = source_fares.len(),
                        "source settled"
                    );
                    fares.append(&mut source_fares);
                }
                Ok(Err(error)) => {
                    tracing::warn!(
                        search_id = %search_id,
                        source = %source_id,
                        error = %error,
                        "source failed, continuing without it"
                    );
                    failures.push(SourceFailure::new(source_id, error));
                }
                Err(join_error) => {
                    tracing::warn!(
                        search_id = %search_id,
                        source = %source_id,
                        error = %join_error,
                        "source task aborted, continuing without it"
                    );
                    failures.push(SourceFailure::new(
                        source_id,
                        SourceError::internal(format!("source task aborted: {join_error}")),
                    ));
                }
            }
        }

        // Stable sort: equal best prices keep per-source emission order,
        // with sources joined in configured order.
        fares.sort_by(|a, b| {
            a.price_resolution
                .best_price()
                .cmp(&b.price_resolution.best_price())
        });

        tracing::info!(
            search_id = %search_id,
            fares = fares.len(),
            failures = failures.len(),
            "fare search settled"
        );

        AggregationReport {
            search_id,
            fares,
            sources_queried,
            failures,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }
}

/// Collects and prices one source's fares.
///
/// Offerings and promotions are fetched concurrently; a failure of either
/// fetch fails the whole source.
async fn collect_source(
    source: Arc<dyn SourceAdapter>,
    query: &SearchQuery,
    resolver: PriceResolver,
) -> SourceResult<Vec<AggregatedFare>> {
    let (offerings, promotions) =
        tokio::join!(source.fetch_offerings(query), source.fetch_promotions());
    let offerings = offerings?;
    let promotions = promotions?;

    let recorded = if promotions.is_empty() {
        None
    } else {
        Some(promotions.clone())
    };

    Ok(offerings
        .into_iter()
        .map(|offering| {
            let resolution = resolver.resolve(offering.base_price(), &promotions);
            AggregatedFare::new(
                source.source_id().clone(),
                offering,
                resolution,
                recorded.clone(),
            )
        })
        .collect())
}
