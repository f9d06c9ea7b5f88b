//! Error types for pattern storage and recall

use thiserror::Error;

/// Library error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Pattern or probe length does not match the store dimension
    #[error("invalid pattern length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A value outside the accepted bipolar/binary domain
    #[error("value {0} is not bipolar (+1/-1) or binary (0/1)")]
    InvalidValue(i64),

    /// An element-wise identical pattern is already stored
    #[error("an identical pattern is already stored")]
    AlreadyExists,

    /// Recall exhausted its pass bound without matching a stored pattern
    #[error("recall did not converge within {passes} passes")]
    NotConverged { passes: usize },

    /// Learning or recall attempted with zero stored patterns
    #[error("no patterns stored")]
    EmptyStore,

    /// Malformed text in a pattern dump
    #[error("malformed pattern text: {0}")]
    Parse(String),
}

/// Result type for this library
pub type Result<T> = std::result::Result<T, MemoryError>;
