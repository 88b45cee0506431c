//! Error types for ranking.

use podium_core::AuthError;
use podium_sort::SortError;
use thiserror::Error;

use crate::winners::Phase;

/// Errors that abort a ranking. No partial result accompanies any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PodiumError {
    /// Batch too small to fill the podium.
    #[error("insufficient participants: need at least {required}, got {got}")]
    InsufficientParticipants { required: usize, got: usize },

    /// A record's tag did not verify; the whole batch is rejected.
    #[error("record {index} failed authentication")]
    Unauthenticated {
        index: usize,
        #[source]
        source: AuthError,
    },

    /// The proposed ordering failed verification.
    #[error("sort verification failed: {0}")]
    SortInvalid(#[from] SortError),
}

impl PodiumError {
    /// The phase the ranking was in when it failed.
    pub fn phase(&self) -> Phase {
        match self {
            PodiumError::InsufficientParticipants { .. } => Phase::Init,
            PodiumError::Unauthenticated { .. } => Phase::Authenticating,
            PodiumError::SortInvalid(_) => Phase::Sorting,
        }
    }
}

/// Result type for ranking operations.
pub type Result<T> = std::result::Result<T, PodiumError>;
