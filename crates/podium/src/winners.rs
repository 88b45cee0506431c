//! Winners: authenticated top-K extraction.
//!
//! A ranking runs through a fixed sequence of phases:
//!
//! ```text
//! Init -> Authenticating -> Sorting -> Extracting -> Done
//! ```
//!
//! Any failure ends the run immediately with a [`PodiumError`]; there are no
//! retries and nothing is carried over to the next invocation.

use podium_core::{verify_batch, Authenticator, Identity, RankingResult, Record};
use podium_sort::{SelectionHint, SortHint, SortPolicy, Sorter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, warn};

use crate::error::{PodiumError, Result};

/// Smallest batch a ranking accepts.
pub const MIN_PARTICIPANTS: usize = 3;

/// Stage of a ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Init,
    Authenticating,
    Sorting,
    Extracting,
    Done,
}

/// Configuration for [`Winners`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinnersConfig {
    /// Checks the sorted candidate must pass. Defaults to adjacency only.
    pub sort_policy: SortPolicy,
}

/// Ranks authenticated batches.
///
/// Holds the verifying key and the sorter; no state survives between calls.
#[derive(Debug, Clone)]
pub struct Winners<A, H = SelectionHint> {
    /// Key every record must verify under.
    key: A,
    /// Oracle plus verifier.
    sorter: Sorter<H>,
}

impl<A: Authenticator> Winners<A> {
    /// Create a ranker using the selection oracle.
    pub fn new(key: A, config: WinnersConfig) -> Self {
        Self::with_hint(key, config, SelectionHint)
    }
}

impl<A: Authenticator, H: SortHint> Winners<A, H> {
    /// Create a ranker with a caller-supplied ordering oracle.
    pub fn with_hint(key: A, config: WinnersConfig, hint: H) -> Self {
        Self {
            key,
            sorter: Sorter::with_hint(hint).policy(config.sort_policy),
        }
    }

    /// The configuration this ranker was built with.
    pub fn config(&self) -> WinnersConfig {
        WinnersConfig {
            sort_policy: self.sorter.current_policy(),
        }
    }

    /// Authenticate the batch and return its three highest scorers.
    pub fn rank<const N: usize>(&self, batch: &[Record; N]) -> Result<RankingResult> {
        let podium: [Identity; 3] = self.top(batch)?;
        Ok(RankingResult::from(podium))
    }

    /// Authenticate the batch and return its `K` highest scorers, best first.
    ///
    /// `K` is usually inferred from the binding:
    /// `let best: [Identity; 5] = winners.top(&batch)?;`
    ///
    /// Requires `N >= max(K, MIN_PARTICIPANTS)`. Every record is checked
    /// before any ordering is trusted.
    pub fn top<const K: usize, const N: usize>(&self, batch: &[Record; N]) -> Result<[Identity; K]> {
        let span = info_span!("rank", participants = N, k = K);
        let _guard = span.enter();

        let outcome = self.run(batch);
        match &outcome {
            Ok(_) => debug!(phase = ?Phase::Done, "ranking complete"),
            Err(e) => warn!(phase = ?e.phase(), error = %e, "ranking rejected"),
        }
        outcome
    }

    fn run<const K: usize, const N: usize>(&self, batch: &[Record; N]) -> Result<[Identity; K]> {
        let required = K.max(MIN_PARTICIPANTS);
        if N < required {
            return Err(PodiumError::InsufficientParticipants { required, got: N });
        }

        debug!(phase = ?Phase::Authenticating);
        verify_batch(batch, &self.key)
            .map_err(|(index, source)| PodiumError::Unauthenticated { index, source })?;

        debug!(phase = ?Phase::Sorting);
        let sorted = self.sorter.sort_by_key(*batch, |record: &Record| record.score)?;

        debug!(phase = ?Phase::Extracting);
        // N >= K was checked above
        Ok(std::array::from_fn(|i| sorted[i].identity))
    }
}

/// Rank a batch with the default configuration.
pub fn rank<A, const N: usize>(batch: &[Record; N], key: &A) -> Result<RankingResult>
where
    A: Authenticator + ?Sized,
{
    Winners::new(key, WinnersConfig::default()).rank(batch)
}
