//! # provenance-audit
//!
//! [`AuditEngine`] composes store → similarity ranking → originality scoring
//! for each audit, and is the only component that talks to the external
//! embedder and persistence collaborators.

pub mod engine;

pub use engine::AuditEngine;
