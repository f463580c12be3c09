//! Subscriber installation and span definitions.

pub mod spans;

use provenance_core::config::{LogFormat, ObservabilityConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.log_filter`. Returns false if a subscriber was
/// already installed, which is not an error: tests and embedding services may
/// install their own first.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    installed.is_ok()
}
