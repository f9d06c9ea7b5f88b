//! Hebbian weight matrix
//!
//! The weight matrix is a pure function of the pattern store: for i != j,
//! `w[i][j]` is the sum over every stored pattern `p` of `p[i] * p[j]`, and
//! the diagonal is always zero. No normalization is applied. The rule is
//! linear in the pattern set, so the matrix can be rebuilt from scratch or
//! accumulated one pattern at a time with identical results.

use ndarray::{Array1, Array2};

use crate::memory::store::PatternStore;
use crate::pattern::Pattern;

/// Symmetric, zero-diagonal weight matrix derived from a pattern set
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    weights: Array2<f64>,
}

impl WeightMatrix {
    /// All-zero matrix of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            weights: Array2::zeros((dimension, dimension)),
        }
    }

    /// Rebuild the matrix from every pattern in the store.
    ///
    /// Pure: the result depends only on the set of stored patterns, not on
    /// their insertion order. An empty store yields the zero matrix.
    pub fn rebuild(store: &PatternStore) -> Self {
        let mut matrix = Self::zeros(store.dimension());
        for pattern in store.iter() {
            matrix.accumulate(pattern);
        }
        matrix
    }

    /// Add one pattern's outer product to the matrix, keeping the diagonal
    /// at zero. The pattern length must match the matrix dimension.
    pub fn accumulate(&mut self, pattern: &Pattern) {
        let n = self.dim();
        debug_assert_eq!(pattern.len(), n);

        let signs = pattern.as_signs();
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    self.weights[[i, j]] += (signs[i] * signs[j]) as f64;
                }
            }
        }
    }

    /// Activation vector `h = W * s` for a bipolar state `s`
    pub fn activation(&self, state: &Pattern) -> Array1<f64> {
        let n = self.dim();
        debug_assert_eq!(state.len(), n);

        let signs = state.as_signs();
        let mut h = Array1::zeros(n);
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                sum += self.weights[[i, j]] * signs[j] as f64;
            }
            h[i] = sum;
        }
        h
    }

    /// Matrix dimension N (the matrix is N x N)
    pub fn dim(&self) -> usize {
        self.weights.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[[i, j]]
    }
}
