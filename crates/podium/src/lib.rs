//! # Podium
//!
//! Authenticated top-K extraction over signed, scored records.
//!
//! ## Overview
//!
//! A batch of [`Record`]s goes through three steps, all or nothing:
//!
//! 1. **Authenticate**: every record's tag is checked against the caller's
//!    key. One bad record rejects the batch.
//! 2. **Sort**: an untrusted oracle proposes a descending order by score and
//!    a linear-time verifier accepts or rejects it.
//! 3. **Extract**: the first three identities become the [`RankingResult`].
//!
//! ## Usage
//!
//! ```rust
//! use podium::{rank, Identity, MacKey, Record};
//!
//! let key = MacKey::from_seed(&[7; 32]);
//! let batch: [Record; 4] = std::array::from_fn(|i| {
//!     Record::sign(Identity::from_bytes([i as u8; 32]), i as u8, &key)
//! });
//!
//! let result = rank(&batch, &key).unwrap();
//! assert_eq!(result.first, Identity::from_bytes([3; 32]));
//! ```
//!
//! ## Verification gap
//!
//! By default the sort is only checked for adjacent ordering, which does not
//! prove the candidate is a rearrangement of the batch. Set
//! [`WinnersConfig::sort_policy`] to [`SortPolicy::Permutation`] to also
//! check placement.
//!
//! ## Re-exports
//!
//! - `podium::core` - records, identities, authentication
//! - `podium::sort` - hint-and-verify sorting

pub mod error;
pub mod winners;

// Re-export component crates
pub use podium_core as core;
pub use podium_sort as sort;

// Re-export main types for convenience
pub use error::{PodiumError, Result};
pub use winners::{rank, Phase, Winners, WinnersConfig, MIN_PARTICIPANTS};

// Re-export commonly used component types
pub use podium_core::{
    AuthError, AuthTag, Authenticator, DigestAuthenticator, Identity, MacKey, RankingResult,
    Record, Score,
};
pub use podium_sort::{SelectionHint, SortError, SortHint, SortPolicy};
