//! Health reporting.

mod reporter;

pub use reporter::{HealthInputs, HealthReport, HealthStatus};
