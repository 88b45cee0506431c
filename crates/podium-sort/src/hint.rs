//! The hint phase: untrusted ordering oracles.
//!
//! An oracle proposes a [`Candidate`] that it claims is the input sorted
//! descending. Nothing it returns is trusted; the verifier in
//! [`crate::verify`] decides whether the candidate may be used. Oracles may
//! be buggy, precomputed elsewhere, or adversarial.

use std::cmp::Ordering;

use crate::error::{Result, SortError};

/// A proposed descending ordering of an `N`-element input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T, const N: usize> {
    /// The claimed descending order.
    pub ordered: [T; N],

    /// Optional claim that `ordered[i]` came from `input[places[i]]`.
    pub places: Option<[usize; N]>,
}

impl<T, const N: usize> Candidate<T, N> {
    /// A candidate with no placement claim.
    pub fn new(ordered: [T; N]) -> Self {
        Self {
            ordered,
            places: None,
        }
    }

    /// A candidate that also names the input slot of every element.
    pub fn with_places(ordered: [T; N], places: [usize; N]) -> Self {
        Self {
            ordered,
            places: Some(places),
        }
    }

    /// Drop the placement claim and keep the ordering.
    pub fn into_ordered(self) -> [T; N] {
        self.ordered
    }
}

/// An ordering oracle.
///
/// Implementations have no correctness contract. They only need to return
/// (or fail) before verification starts.
pub trait SortHint {
    /// Propose a descending ordering of `input` under `cmp`.
    fn propose<T, F, const N: usize>(&self, input: &[T; N], cmp: F) -> Result<Candidate<T, N>>
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering;
}

/// Remove and return the greatest remaining value.
///
/// `None` slots are tombstones and are skipped. On ties the lowest index
/// wins. Returns the slot index alongside the value, or `None` once every
/// slot is a tombstone.
pub fn select_max<T, F>(slots: &mut [Option<T>], cmp: F) -> Option<(usize, T)>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut best: Option<(usize, &T)> = None;
    for (index, slot) in slots.iter().enumerate() {
        let Some(value) = slot else { continue };
        if best.map_or(true, |(_, current)| cmp(value, current) == Ordering::Greater) {
            best = Some((index, value));
        }
    }

    let index = best.map(|(index, _)| index)?;
    slots[index].take().map(|value| (index, value))
}

/// Selection oracle: N rounds of [`select_max`] over tombstoned scratch slots.
///
/// Quadratic, which is fine: hint cost is not charged to verification.
/// Always supplies places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionHint;

impl SortHint for SelectionHint {
    fn propose<T, F, const N: usize>(&self, input: &[T; N], cmp: F) -> Result<Candidate<T, N>>
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        let mut slots: [Option<T>; N] = std::array::from_fn(|i| Some(input[i].clone()));
        let mut ordered = Vec::with_capacity(N);
        let mut places = [0usize; N];

        for place in places.iter_mut() {
            let (index, value) = select_max(&mut slots, &cmp).ok_or(SortError::HintFailed)?;
            *place = index;
            ordered.push(value);
        }

        let ordered: [T; N] = ordered.try_into().map_err(|_| SortError::HintFailed)?;
        Ok(Candidate::with_places(ordered, places))
    }
}
