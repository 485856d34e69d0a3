//! Sparse feature vectors shared by vectorizers and classifiers

use serde::{Deserialize, Serialize};

/// Errors raised while transforming text or scoring features
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("feature index {index} out of range for dimension {dimension}")]
    FeatureIndex { index: usize, dimension: usize },

    #[error("non-finite value in {0}")]
    NonFinite(String),

    #[error("invalid probability distribution: {0}")]
    InvalidDistribution(String),

    #[error("invalid model parameters: {0}")]
    InvalidParameters(String),
}

/// Fixed-length numeric feature representation, stored sparsely.
///
/// Entries are sorted by index with no duplicates; absent indices are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Build a vector from unsorted `(index, value)` pairs.
    ///
    /// Duplicate indices are summed and explicit zeros are dropped.
    pub fn from_entries(
        dimension: usize,
        mut entries: Vec<(usize, f64)>,
    ) -> Result<Self, ModelError> {
        entries.sort_by_key(|(index, _)| *index);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, value) in entries {
            if index >= dimension {
                return Err(ModelError::FeatureIndex { index, dimension });
            }
            if !value.is_finite() {
                return Err(ModelError::NonFinite(format!("feature {}", index)));
            }
            if let Some((last, acc)) = merged.last_mut() {
                if *last == index {
                    *acc += value;
                    continue;
                }
            }
            merged.push((index, value));
        }
        merged.retain(|(_, value)| *value != 0.0);

        Ok(Self {
            dimension,
            entries: merged,
        })
    }

    /// All-zero vector, produced for empty text
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Non-zero entries, sorted by index
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Dense copy of the vector
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension];
        for &(index, value) in &self.entries {
            dense[index] = value;
        }
        dense
    }

    /// Dot product with a dense weight vector of the same dimension
    pub fn dot(&self, weights: &[f64]) -> Result<f64, ModelError> {
        if weights.len() != self.dimension {
            return Err(ModelError::DimensionMismatch {
                expected: weights.len(),
                actual: self.dimension,
            });
        }
        Ok(self
            .entries
            .iter()
            .map(|&(index, value)| value * weights[index])
            .sum())
    }

    /// Scale every entry in place
    pub(crate) fn scale(&mut self, factor: f64) {
        for (_, value) in &mut self.entries {
            *value *= factor;
        }
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }
}
