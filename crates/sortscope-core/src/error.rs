//! Error types for algorithm lookup and evaluation

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SortError>;

/// Failures surfaced to callers of the evaluator.
///
/// The sort functions themselves never fail; these variants only cover
/// identifier validation and the optional post-timing order check.
///
/// # Example
///
/// ```
/// use sortscope_core::{Algorithm, SortError};
///
/// let err = "bogo sort".parse::<Algorithm>().unwrap_err();
/// assert!(matches!(err, SortError::UnknownAlgorithm { .. }));
/// assert!(err.to_string().contains("bogo sort"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Requested algorithm is not one of the five known sorts
    #[error("Unknown sorting algorithm: {name}")]
    UnknownAlgorithm {
        /// Identifier as supplied by the caller
        name: String,
    },

    /// A sort produced output that is not non-decreasing
    #[error("{algorithm} produced out-of-order output")]
    OrderViolation {
        /// Algorithm whose output failed the check
        algorithm: Algorithm,
    },
}

impl SortError {
    /// Create an UnknownAlgorithm error
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }
}
