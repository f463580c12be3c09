//! Embedding cache tiers. Only the in-memory tier is kept in-process.

pub mod l1_memory;

pub use l1_memory::L1MemoryCache;
