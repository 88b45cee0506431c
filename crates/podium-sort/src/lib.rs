//! # Podium Sort
//!
//! Hint-and-verify sorting for fixed-size arrays.
//!
//! Sorting is split into two phases that never share code:
//!
//! 1. **Hint**: an untrusted oracle ([`SortHint`]) proposes a [`Candidate`].
//!    Its cost is not part of the verification budget and it may be wrong.
//! 2. **Verify**: [`verify_descending`] checks the candidate in O(N). Under
//!    [`SortPolicy::Permutation`], [`verify_permutation`] also checks that the
//!    candidate is a rearrangement of the input.
//!
//! ```rust
//! use podium_sort::sort_descending;
//!
//! assert_eq!(sort_descending([4, 1, 2, 3]).unwrap(), [4, 3, 2, 1]);
//! ```

pub mod error;
pub mod hint;
pub mod sorter;
pub mod verify;

pub use error::{Result, SortError};
pub use hint::{select_max, Candidate, SelectionHint, SortHint};
pub use sorter::{sort_descending, sort_descending_by_key, SortPolicy, Sorter};
pub use verify::{verify_descending, verify_permutation};
