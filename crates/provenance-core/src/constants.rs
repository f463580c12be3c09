/// Provenance core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of matches reported in an audit result.
pub const MAX_AUDIT_MATCHES: usize = 5;

/// Originality reported when there is nothing to compare against.
pub const MAX_ORIGINALITY: f64 = 1.0;

/// Tolerance used when checking that a vector is unit length.
pub const UNIT_NORM_TOLERANCE: f64 = 1e-4;

/// Corpus size from which ranking is split across the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;
