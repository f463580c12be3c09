mod embedding;
mod persistence;

pub use embedding::IMediaEmbedder;
pub use persistence::IEmbeddingPersistence;
