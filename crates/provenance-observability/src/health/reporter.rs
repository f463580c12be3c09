//! Builds a [`HealthReport`] from the auditor's current state.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Vector-only mode: no embedder attached, media operations unavailable.
    Degraded,
    /// An embedder is attached but reports unavailable.
    Unhealthy,
}

/// State the reporter needs, gathered by the caller.
#[derive(Debug, Clone)]
pub struct HealthInputs {
    pub corpus_size: usize,
    pub dimensions: Option<usize>,
    /// `(name, available)` of the attached embedder.
    pub embedder: Option<(String, bool)>,
    pub metrics: MetricsSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub corpus_size: usize,
    pub dimensions: Option<usize>,
    pub embedder: Option<String>,
    pub metrics: MetricsSnapshot,
}

impl HealthReport {
    pub fn build(inputs: HealthInputs) -> Self {
        let status = match &inputs.embedder {
            None => HealthStatus::Degraded,
            Some((_, true)) => HealthStatus::Healthy,
            Some((_, false)) => HealthStatus::Unhealthy,
        };
        Self {
            status,
            corpus_size: inputs.corpus_size,
            dimensions: inputs.dimensions,
            embedder: inputs.embedder.map(|(name, _)| name),
            metrics: inputs.metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(embedder: Option<(String, bool)>) -> HealthInputs {
        HealthInputs {
            corpus_size: 3,
            dimensions: Some(512),
            embedder,
            metrics: MetricsSnapshot::default(),
        }
    }

    #[test]
    fn no_embedder_is_degraded() {
        assert_eq!(HealthReport::build(inputs(None)).status, HealthStatus::Degraded);
    }

    #[test]
    fn unavailable_embedder_is_unhealthy() {
        let report = HealthReport::build(inputs(Some(("clip".into(), false))));
        assert_eq!(report.status, HealthStatus::Unhealthy);
        assert_eq!(report.embedder.as_deref(), Some("clip"));
    }

    #[test]
    fn serializes_lowercase_status() {
        let report = HealthReport::build(inputs(Some(("clip".into(), true))));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["corpus_size"], 3);
    }
}
