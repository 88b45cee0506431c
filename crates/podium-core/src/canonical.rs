//! Canonical message encoding for record authentication.
//!
//! The signed message is fixed-width:
//!
//! ```text
//! identity (32 bytes, in order) || score (1 byte)
//! ```
//!
//! There is no framing, version byte or domain tag. Two records produce the
//! same message iff their identity and score are equal.

use crate::record::Record;
use crate::types::{Identity, Score, IDENTITY_LEN};

/// Length of the canonical message in bytes.
pub const MESSAGE_LEN: usize = IDENTITY_LEN + 1;

/// Encode `(identity, score)` into the canonical signed message.
pub fn canonical_message(identity: &Identity, score: Score) -> [u8; MESSAGE_LEN] {
    let mut buf = [0u8; MESSAGE_LEN];
    buf[..IDENTITY_LEN].copy_from_slice(identity.as_bytes());
    buf[IDENTITY_LEN] = score;
    buf
}

/// The canonical message a record's tag must cover.
pub fn signed_message(record: &Record) -> [u8; MESSAGE_LEN] {
    canonical_message(&record.identity, record.score)
}
