//! Error types for hint-and-verify sorting.

use thiserror::Error;

/// Sorting errors. Any of these means the candidate must not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("candidate not sorted descending: slot {position} ranks below its successor")]
    NotSorted { position: usize },

    #[error("candidate slot {position} is not drawn from the input")]
    NotPermutation { position: usize },

    #[error("oracle supplied no input places; permutation cannot be checked")]
    MissingPlaces,

    #[error("ordering oracle failed to produce a candidate")]
    HintFailed,
}

/// Result type for sorting operations.
pub type Result<T> = std::result::Result<T, SortError>;
