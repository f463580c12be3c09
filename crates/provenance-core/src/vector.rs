//! Unit-normalized feature embedding.
//!
//! Every vector that enters the store or a ranking pass goes through
//! [`Vector::new`], so cosine similarity between any two of them is their dot product.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{ProvenanceError, ProvenanceResult};

/// An immutable, L2-normalized embedding of fixed dimensionality.
///
/// Cloning is cheap: components live behind an `Arc`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct Vector(Arc<[f32]>);

impl Vector {
    /// Validate and normalize raw components.
    ///
    /// # Errors
    /// Returns `InvalidVector` if `components` is empty, contains NaN or an
    /// infinity, or has zero Euclidean norm.
    pub fn new(mut components: Vec<f32>) -> ProvenanceResult<Self> {
        if components.is_empty() {
            return Err(ProvenanceError::invalid_vector("vector has no components"));
        }
        if let Some(idx) = components.iter().position(|c| !c.is_finite()) {
            return Err(ProvenanceError::invalid_vector(format!(
                "component {idx} is not finite"
            )));
        }

        let norm = components
            .iter()
            .map(|c| (*c as f64) * (*c as f64))
            .sum::<f64>()
            .sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return Err(ProvenanceError::invalid_vector(
                "vector has zero norm and cannot be normalized",
            ));
        }

        for c in &mut components {
            *c = (*c as f64 / norm) as f32;
        }

        Ok(Self(components.into()))
    }

    /// Number of components.
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Borrow the normalized components.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Cosine similarity with another unit vector, accumulated in f64.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the vectors differ in length.
    pub fn cosine(&self, other: &Vector) -> ProvenanceResult<f64> {
        if self.dimensions() != other.dimensions() {
            return Err(ProvenanceError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        let dot: f64 = self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (*a as f64) * (*b as f64))
            .sum();
        Ok(dot.clamp(-1.0, 1.0))
    }
}

impl Deref for Vector {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

impl TryFrom<Vec<f32>> for Vector {
    type Error = ProvenanceError;

    fn try_from(components: Vec<f32>) -> ProvenanceResult<Self> {
        Self::new(components)
    }
}

impl From<Vector> for Vec<f32> {
    fn from(vector: Vector) -> Self {
        vector.0.to_vec()
    }
}

/// Anything that can be validated into a [`Vector`].
pub trait IntoVector {
    fn into_vector(self) -> ProvenanceResult<Vector>;
}

impl IntoVector for Vector {
    fn into_vector(self) -> ProvenanceResult<Vector> {
        Ok(self)
    }
}

impl IntoVector for &Vector {
    fn into_vector(self) -> ProvenanceResult<Vector> {
        Ok(self.clone())
    }
}

impl IntoVector for Vec<f32> {
    fn into_vector(self) -> ProvenanceResult<Vector> {
        Vector::new(self)
    }
}

impl IntoVector for &[f32] {
    fn into_vector(self) -> ProvenanceResult<Vector> {
        Vector::new(self.to_vec())
    }
}

impl<const N: usize> IntoVector for [f32; N] {
    fn into_vector(self) -> ProvenanceResult<Vector> {
        Vector::new(self.to_vec())
    }
}
