//! Lookup metrics.
//!
//! Counts how content lookups were resolved: direct hits, fallbacks to the
//! default language, and rejected unknown codes.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Atomic lookup counters owned by a content store.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups answered with the requested language
    hits: AtomicUsize,

    /// Lookups answered with the default language instead
    fallbacks: AtomicUsize,

    /// Lookups rejected because the code was unknown
    unknown: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unknown(&self) {
        self.unknown.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn unknown(&self) -> usize {
        self.unknown.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let unknown = self.unknown();
        let lookups = hits + fallbacks + unknown;
        let hit_rate = if lookups > 0 {
            (hits as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            hits,
            fallbacks,
            unknown,
            hit_rate,
        }
    }
}

/// Point-in-time snapshot of lookup metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub hits: usize,
    pub fallbacks: usize,
    pub unknown: usize,
    /// Percentage of lookups answered in the requested language
    pub hit_rate: f64,
}

impl MetricsReport {
    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "Content lookups: {} total, {} hits ({:.1}%), {} fallbacks, {} unknown",
            self.lookups, self.hits, self.hit_rate, self.fallbacks, self.unknown
        )
    }
}
