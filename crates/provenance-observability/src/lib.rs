//! # provenance-observability
//!
//! Structured logging setup, span macros, lock-free audit counters, and the
//! health report the surrounding service exposes.

pub mod health;
pub mod metrics;
pub mod tracing_setup;

pub use health::{HealthReport, HealthStatus};
pub use metrics::{AuditMetrics, MetricsSnapshot};
pub use tracing_setup::init_tracing;
