use serde::{Deserialize, Serialize};

/// Embedding store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Fixed corpus dimensionality. When unset, the first stored vector fixes it.
    pub dimensions: Option<usize>,
}
