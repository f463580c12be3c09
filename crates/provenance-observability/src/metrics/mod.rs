//! Audit and index counters.
//!
//! [`AuditMetrics`] is shared across request threads and updated with relaxed
//! atomics; [`MetricsSnapshot`] is the serializable read-out.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Originality is accumulated in millionths so it fits an atomic integer.
const ORIGINALITY_SCALE: f64 = 1_000_000.0;

#[derive(Debug, Default)]
pub struct AuditMetrics {
    audits: AtomicU64,
    empty_corpus_audits: AtomicU64,
    audit_failures: AtomicU64,
    originality_micros: AtomicU64,
    indexed: AtomicU64,
    index_failures: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
}

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub audits: u64,
    pub empty_corpus_audits: u64,
    pub audit_failures: u64,
    /// Mean originality over successful audits; 0.0 before the first one.
    pub mean_originality: f64,
    pub indexed: u64,
    pub index_failures: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_hit_rate: f64,
}

impl AuditMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful audit.
    pub fn record_audit(&self, originality: f64, empty_corpus: bool) {
        self.audits.fetch_add(1, Ordering::Relaxed);
        if empty_corpus {
            self.empty_corpus_audits.fetch_add(1, Ordering::Relaxed);
        }
        let micros = (originality.clamp(0.0, 1.0) * ORIGINALITY_SCALE).round() as u64;
        self.originality_micros.fetch_add(micros, Ordering::Relaxed);
    }

    pub fn record_audit_failure(&self) {
        self.audit_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_index(&self) {
        self.indexed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_index_failure(&self) {
        self.index_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record whether an embedding was served from cache.
    pub fn record_embedding(&self, cached: bool) {
        let counter = if cached {
            &self.cache_hits
        } else {
            &self.cache_misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let audits = self.audits.load(Ordering::Relaxed);
        let originality_micros = self.originality_micros.load(Ordering::Relaxed);
        let cache_hits = self.cache_hits.load(Ordering::Relaxed);
        let cache_misses = self.cache_misses.load(Ordering::Relaxed);

        let mean_originality = if audits == 0 {
            0.0
        } else {
            originality_micros as f64 / ORIGINALITY_SCALE / audits as f64
        };
        let lookups = cache_hits + cache_misses;
        let cache_hit_rate = if lookups == 0 {
            0.0
        } else {
            cache_hits as f64 / lookups as f64
        };

        MetricsSnapshot {
            audits,
            empty_corpus_audits: self.empty_corpus_audits.load(Ordering::Relaxed),
            audit_failures: self.audit_failures.load(Ordering::Relaxed),
            mean_originality,
            indexed: self.indexed.load(Ordering::Relaxed),
            index_failures: self.index_failures.load(Ordering::Relaxed),
            cache_hits,
            cache_misses,
            cache_hit_rate,
        }
    }
}
