//! Record authentication: recompute the tag and compare.

use crate::canonical::signed_message;
use crate::crypto::Authenticator;
use crate::error::AuthError;
use crate::record::Record;

/// Check one record's tag against `key`.
///
/// Recomputes the tag over the canonical `identity || score` message. No
/// side effects beyond the verdict.
pub fn verify_record<A: Authenticator + ?Sized>(record: &Record, key: &A) -> Result<(), AuthError> {
    let message = signed_message(record);
    if key.verify(&message, &record.tag) {
        Ok(())
    } else {
        Err(AuthError::SignatureMismatch {
            identity: record.identity,
        })
    }
}

/// Check every record in a batch, fail-closed.
///
/// Stops at the first record that does not verify and returns its index.
/// A batch is only trusted when every record passes.
pub fn verify_batch<A: Authenticator + ?Sized>(
    records: &[Record],
    key: &A,
) -> Result<(), (usize, AuthError)> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| verify_record(record, key).map_err(|e| (index, e)))
}
