//! # Podium Testkit
//!
//! Testing utilities for Podium.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: canonical message and tag bytes for fixed inputs
//! - **Generators**: Proptest strategies for records and signed batches
//! - **Fixtures**: a keyed helper for building signed batches
//!
//! ## Golden Vectors
//!
//! ```rust
//! use podium_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches) in verify_all_vectors() {
//!     assert!(matches, "{name}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use podium_testkit::generators::signed_batch;
//!
//! proptest! {
//!     #[test]
//!     fn batch_verifies((key, batch) in signed_batch::<8>()) {
//!         prop_assert!(podium_core::verify_batch(&batch, &key).is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use podium_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let batch = fixture.batch([10, 30, 20]);
//! assert_eq!(batch.len(), 3);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{indexed_identity, TestFixture};
pub use generators::{record_from_params, signed_batch, RecordParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
