//! Error types for Podium Core.

use thiserror::Error;

use crate::types::Identity;

/// Failure of the per-record authentication check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("signature mismatch for identity {identity}")]
    SignatureMismatch { identity: Identity },
}
