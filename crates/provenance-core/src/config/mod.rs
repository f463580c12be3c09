//! Configuration for every subsystem, loadable from TOML.
//!
//! # Examples
//!
//! ```
//! use provenance_core::config::ProvenanceConfig;
//!
//! let config = ProvenanceConfig::from_toml_str("[ranking]\nmax_matches = 3\n").unwrap();
//! assert_eq!(config.ranking.max_matches, 3);
//! assert_eq!(config.store.dimensions, None);
//! ```

pub mod defaults;
mod embedding_config;
mod observability_config;
mod ranking_config;
mod store_config;

pub use embedding_config::EmbeddingConfig;
pub use observability_config::{LogFormat, ObservabilityConfig};
pub use ranking_config::RankingConfig;
pub use store_config::StoreConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ProvenanceError, ProvenanceResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvenanceConfig {
    pub store: StoreConfig,
    pub ranking: RankingConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl ProvenanceConfig {
    /// Parse and validate a TOML document. Missing sections take defaults.
    pub fn from_toml_str(input: &str) -> ProvenanceResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no audit could run with.
    pub fn validate(&self) -> ProvenanceResult<()> {
        if self.store.dimensions == Some(0) {
            return Err(ProvenanceError::ConfigError {
                reason: "store.dimensions must be greater than zero".to_string(),
            });
        }
        if self.ranking.max_matches == 0 {
            return Err(ProvenanceError::ConfigError {
                reason: "ranking.max_matches must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
