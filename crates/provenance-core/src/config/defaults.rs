//! Default values for every configuration section.

pub const DEFAULT_MAX_MATCHES: usize = crate::constants::MAX_AUDIT_MATCHES;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = crate::constants::DEFAULT_PARALLEL_THRESHOLD;

pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

pub const DEFAULT_LOG_FILTER: &str = "info";
