//! Strong type definitions for Podium.
//!
//! Identifiers are newtypes so an identity can never be confused with a tag
//! or a digest at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A participant score. Totally ordered; higher ranks first.
pub type Score = u8;

/// Width of an [`Identity`] in bytes.
pub const IDENTITY_LEN: usize = 32;

/// A 32-byte opaque participant identity.
///
/// Assigned once by the caller and never rewritten inside the system.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(pub [u8; IDENTITY_LEN]);

impl Identity {
    /// Create an identity from raw bytes.
    pub const fn from_bytes(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// The three highest-scoring identities of an authenticated batch, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankingResult {
    pub first: Identity,
    pub second: Identity,
    pub third: Identity,
}

impl RankingResult {
    /// The podium as an array, highest first.
    pub const fn to_array(&self) -> [Identity; 3] {
        [self.first, self.second, self.third]
    }
}

impl From<[Identity; 3]> for RankingResult {
    fn from([first, second, third]: [Identity; 3]) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
}

impl From<RankingResult> for [Identity; 3] {
    fn from(result: RankingResult) -> Self {
        result.to_array()
    }
}
