//! Ranking pipeline: exact cosine scan, then originality scoring.

pub mod scorer;
pub mod similarity;
