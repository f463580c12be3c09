use crate::errors::ProvenanceResult;

/// External feature-extraction model: raw media bytes in, fixed-length vector out.
///
/// Implementations need not normalize; the embedding engine does that.
pub trait IMediaEmbedder: Send + Sync {
    /// Embed one media artifact.
    fn embed(&self, media: &[u8]) -> ProvenanceResult<Vec<f32>>;

    /// The dimensionality of vectors produced by this embedder.
    fn dimensions(&self) -> usize;

    /// Human-readable embedder name.
    fn name(&self) -> &str;

    /// Whether the embedder can currently serve requests.
    fn is_available(&self) -> bool {
        true
    }
}
