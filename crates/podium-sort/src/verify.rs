//! The verification phase: trusted, linear-time checks of a candidate.
//!
//! Nothing here calls into an oracle or depends on how a candidate was
//! produced.
//!
//! [`verify_descending`] is the adjacency check. On its own it does not prove
//! that the candidate is a rearrangement of the input: an oracle can return
//! any internally sorted array (for example N copies of the maximum) and pass.
//! [`verify_permutation`] closes that gap when the oracle supplies places.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Result, SortError};
use crate::hint::Candidate;

/// Check that every adjacent pair is non-increasing under `cmp`.
///
/// O(N). Empty and single-element slices pass vacuously. On failure the
/// error names the first slot whose successor ranks above it.
pub fn verify_descending<T, F>(ordered: &[T], cmp: F) -> Result<()>
where
    F: Fn(&T, &T) -> Ordering,
{
    match ordered
        .windows(2)
        .position(|pair| cmp(&pair[0], &pair[1]) == Ordering::Less)
    {
        Some(position) => {
            trace!(position, len = ordered.len(), "adjacency check failed");
            Err(SortError::NotSorted { position })
        }
        None => Ok(()),
    }
}

/// Check that the candidate is a rearrangement of `input`.
///
/// Every claimed place must be in range and used once, and the element at
/// that place must equal the candidate's element. O(N) with an N-slot bitmap.
pub fn verify_permutation<T, const N: usize>(input: &[T; N], candidate: &Candidate<T, N>) -> Result<()>
where
    T: PartialEq,
{
    let places = candidate.places.as_ref().ok_or(SortError::MissingPlaces)?;
    let mut unused = [true; N];

    for (position, (&place, value)) in places.iter().zip(candidate.ordered.iter()).enumerate() {
        let fresh = unused
            .get_mut(place)
            .map(|slot| std::mem::replace(slot, false))
            .unwrap_or(false);

        if !fresh || input[place] != *value {
            trace!(position, place, "permutation check failed");
            return Err(SortError::NotPermutation { position });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_accepts_sorted() {
        assert!(verify_descending(&[4u8, 3, 2, 1], u8::cmp).is_ok());
        assert!(verify_descending(&[5u8, 5, 5], u8::cmp).is_ok());
    }

    #[test]
    fn test_descending_vacuous_cases() {
        assert!(verify_descending::<u8, _>(&[], u8::cmp).is_ok());
        assert!(verify_descending(&[7u8], u8::cmp).is_ok());
    }

    #[test]
    fn test_descending_reports_first_violation() {
        assert_eq!(
            verify_descending(&[4u8, 3, 5, 1, 2], u8::cmp),
            Err(SortError::NotSorted { position: 1 })
        );
        assert_eq!(
            verify_descending(&[1u8, 2], u8::cmp),
            Err(SortError::NotSorted { position: 0 })
        );
    }

    #[test]
    fn test_permutation_accepts_true_rearrangement() {
        let input = [4u8, 1, 2, 3];
        let candidate = Candidate::with_places([4, 3, 2, 1], [0, 3, 2, 1]);
        assert!(verify_permutation(&input, &candidate).is_ok());
    }

    #[test]
    fn test_permutation_requires_places() {
        let candidate = Candidate::new([2u8, 1]);
        assert_eq!(
            verify_permutation(&[1, 2], &candidate),
            Err(SortError::MissingPlaces)
        );
    }

    #[test]
    fn test_permutation_rejects_substituted_value() {
        let input = [4u8, 1, 2, 3];
        let candidate = Candidate::with_places([4, 4, 4, 4], [0, 3, 2, 1]);
        assert_eq!(
            verify_permutation(&input, &candidate),
            Err(SortError::NotPermutation { position: 1 })
        );
    }

    #[test]
    fn test_permutation_rejects_reused_place() {
        let input = [4u8, 4, 2, 3];
        // Slot 0 claimed twice; the values match so only the bitmap catches it
        let candidate = Candidate::with_places([4, 4, 3, 2], [0, 0, 3, 2]);
        assert_eq!(
            verify_permutation(&input, &candidate),
            Err(SortError::NotPermutation { position: 1 })
        );
    }

    #[test]
    fn test_permutation_rejects_out_of_range_place() {
        let input = [2u8, 1];
        let candidate = Candidate::with_places([2, 1], [0, 9]);
        assert_eq!(
            verify_permutation(&input, &candidate),
            Err(SortError::NotPermutation { position: 1 })
        );
    }
}
