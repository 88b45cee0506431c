//! Hint-and-verify sorting: an oracle composed with the trusted verifier.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::hint::{SelectionHint, SortHint};
use crate::verify::{verify_descending, verify_permutation};

/// Which checks a candidate must pass before it is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Adjacent pairs must be non-increasing. Does not detect a candidate
    /// that is sorted but unrelated to the input.
    #[default]
    AdjacencyOnly,

    /// Adjacency plus a placement-based permutation check.
    Permutation,
}

/// Sorts fixed-size arrays descending by asking an oracle and checking the
/// answer.
#[derive(Debug, Clone, Default)]
pub struct Sorter<H = SelectionHint> {
    hint: H,
    policy: SortPolicy,
}

impl Sorter<SelectionHint> {
    /// A sorter backed by the selection oracle.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: SortHint> Sorter<H> {
    /// A sorter backed by a caller-supplied oracle.
    pub fn with_hint(hint: H) -> Self {
        Self {
            hint,
            policy: SortPolicy::default(),
        }
    }

    /// Set the verification policy.
    pub fn policy(mut self, policy: SortPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active verification policy.
    pub fn current_policy(&self) -> SortPolicy {
        self.policy
    }

    /// Sort descending under `cmp`.
    ///
    /// The candidate is untrusted until every check of the policy passes;
    /// no partial result is returned on failure.
    pub fn sort_by<T, F, const N: usize>(&self, input: [T; N], cmp: F) -> Result<[T; N]>
    where
        T: Clone + PartialEq,
        F: Fn(&T, &T) -> Ordering,
    {
        let candidate = self.hint.propose(&input, &cmp)?;

        verify_descending(&candidate.ordered, &cmp)?;
        if self.policy == SortPolicy::Permutation {
            verify_permutation(&input, &candidate)?;
        }

        debug!(len = N, policy = ?self.policy, "candidate accepted");
        Ok(candidate.into_ordered())
    }

    /// Sort descending by an extracted key.
    pub fn sort_by_key<T, K, F, const N: usize>(&self, input: [T; N], key: F) -> Result<[T; N]>
    where
        T: Clone + PartialEq,
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.sort_by(input, |a, b| key(a).cmp(&key(b)))
    }
}

/// Sort descending with the selection oracle and the adjacency check.
pub fn sort_descending<T, const N: usize>(input: [T; N]) -> Result<[T; N]>
where
    T: Ord + Clone,
{
    Sorter::new().sort_by(input, T::cmp)
}

/// Sort descending by key with the selection oracle and the adjacency check.
pub fn sort_descending_by_key<T, K, F, const N: usize>(input: [T; N], key: F) -> Result<[T; N]>
where
    T: Clone + PartialEq,
    K: Ord,
    F: Fn(&T) -> K,
{
    Sorter::new().sort_by_key(input, key)
}
