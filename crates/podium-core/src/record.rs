//! Record: the unit of input to a ranking.
//!
//! A record binds a score to an identity under an [`AuthTag`]. The tag is
//! established once, when the record is signed, and only checked afterwards.

use serde::{Deserialize, Serialize};

use crate::canonical::{canonical_message, signed_message};
use crate::crypto::{AuthTag, Authenticator};
use crate::types::{Identity, Score};

/// A scored, signed participant entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Who the score belongs to.
    pub identity: Identity,

    /// The score being ranked.
    pub score: Score,

    /// Tag over `identity || score`.
    pub tag: AuthTag,
}

impl Record {
    /// Sign `(identity, score)` with `key` and assemble the record.
    pub fn sign<A: Authenticator + ?Sized>(identity: Identity, score: Score, key: &A) -> Self {
        let tag = key.sign(&canonical_message(&identity, score));
        Self {
            identity,
            score,
            tag,
        }
    }

    /// Assemble a record from parts without checking the tag.
    pub const fn from_parts(identity: Identity, score: Score, tag: AuthTag) -> Self {
        Self {
            identity,
            score,
            tag,
        }
    }

    /// Whether the tag verifies under `key`.
    pub fn is_authentic<A: Authenticator + ?Sized>(&self, key: &A) -> bool {
        key.verify(&signed_message(self), &self.tag)
    }
}
