#![allow(clippy::unwrap_used, missing_docs)]

use async_trait::async_trait;
use criterion::{Criterion, criterion_group, criterion_main};
use skyfare::{
    AggregationConfig, FareAggregationEngine, Offering, Price, PriceResolver, Promotion,
    SearchQuery, SourceAdapter, SourceId, SourceResult, StaticSourceRegistry,
};
use std::hint::black_box;
use std::sync::Arc;

fn promotions(count: usize) -> Vec<Promotion> {
    (0..count)
        .map(|i| {
            let (kind, value) = match i % 3 {
                0 => ("percent", "5"),
                1 => ("flat", "150"),
                _ => ("cashback", "500"),
            };
            Promotion::builder()
                .code(format!("PROMO-{i}"))
                .discount_kind(kind)
                .discount_value(value)
                .build()
        })
        .collect()
}

fn offerings(count: usize) -> Vec<Offering> {
    (0..count)
        .map(|i| {
            Offering::new(
                "IndiGo",
                format!("6E-{i}"),
                "06:30",
                "08:45",
                "2h 15m",
                Price::new(3000.0 + i as f64 * 17.0).unwrap(),
            )
        })
        .collect()
}

#[derive(Debug)]
struct BenchSource {
    id: SourceId,
    offerings: Vec<Offering>,
    promotions: Vec<Promotion>,
}

#[async_trait]
impl SourceAdapter for BenchSource {
    fn source_id(&self) -> &SourceId {
        &self.id
    }

    async fn fetch_offerings(&self, _query: &SearchQuery) -> SourceResult<Vec<Offering>> {
        Ok(self.offerings.clone())
    }

    async fn fetch_promotions(&self) -> SourceResult<Vec<Promotion>> {
        Ok(self.promotions.clone())
    }
}

fn resolver_benchmark(c: &mut Criterion) {
    let resolver = PriceResolver::new();
    let base = Price::new(4500.0).unwrap();
    let promotions = promotions(100);

    c.bench_function("resolve_100_promotions", |b| {
        b.iter(|| resolver.resolve(black_box(base), black_box(&promotions)))
    });
}

fn search_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let sources: Vec<Arc<dyn SourceAdapter>> = (0..6)
        .map(|i| {
            Arc::new(BenchSource {
                id: SourceId::new(format!("source-{i}")),
                offerings: offerings(50),
                promotions: promotions(10),
            }) as Arc<dyn SourceAdapter>
        })
        .collect();

    let engine = FareAggregationEngine::new(
        Arc::new(StaticSourceRegistry::from_sources(sources)),
        AggregationConfig::default(),
    );
    let query = SearchQuery::new("DEL", "BOM", "2026-09-01").unwrap();

    c.bench_function("search_6_sources_50_offerings", |b| {
        b.to_async(&runtime).iter(|| engine.search(&query))
    });
}

criterion_group!(benches, resolver_benchmark, search_benchmark);
criterion_main!(benches);
