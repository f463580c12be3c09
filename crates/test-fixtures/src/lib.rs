//! Test fixtures for the provenance workspace: golden audit scenarios and
//! in-process doubles for the external collaborators (embedder, persistence).

mod doubles;

pub use doubles::{DigestEmbedder, LookupEmbedder, MemoryPersistence};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// An artifact to index before running a golden scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexStep {
    pub artifact_id: String,
    pub vector: Vec<f32>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Expected outcome of a golden audit.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpectedOutcome {
    Success {
        originality_score: f64,
        match_ids: Vec<String>,
    },
    Failure {
        error: String,
    },
}

/// One golden audit scenario: index these, audit that, expect this.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditScenario {
    pub name: String,
    #[serde(default)]
    pub index: Vec<IndexStep>,
    pub query: Vec<f32>,
    pub expected: ExpectedOutcome,
}

/// Load every golden audit scenario.
pub fn audit_scenarios() -> Vec<AuditScenario> {
    load_fixture("golden/audit_scenarios.json")
}

/// Unit vector along `axis` in `dims` dimensions.
pub fn axis(dims: usize, axis: usize) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[axis] = 1.0;
    v
}
