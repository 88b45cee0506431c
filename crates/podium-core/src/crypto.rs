//! Authentication primitives for Podium records.
//!
//! Record tags are produced and checked through the [`Authenticator`]
//! capability. Two schemes are provided:
//!
//! - [`DigestAuthenticator`]: tag = Blake3(message). No key material; anyone
//!   can produce a valid tag. It only catches fields changed after signing.
//! - [`MacKey`]: tag = keyed Blake3(key, message). The same key signs and
//!   verifies.
//!
//! Neither is a public-key signature scheme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of an [`AuthTag`] in bytes.
pub const TAG_LEN: usize = 32;

/// A 32-byte Blake3 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blake3Hash(pub [u8; 32]);

impl Blake3Hash {
    /// Compute the Blake3 hash of the given data.
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Blake3Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blake3({})", &self.to_hex()[..16])
    }
}

/// A 32-byte authentication tag bound to one canonical message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthTag(pub [u8; TAG_LEN]);

impl AuthTag {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for AuthTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthTag({}...)", &self.to_hex()[..16])
    }
}

/// The sign/verify capability a batch is checked against.
///
/// Implementations are stateless from the caller's point of view: neither
/// method mutates the handle.
pub trait Authenticator: Send + Sync {
    /// Produce the tag for `message`.
    fn sign(&self, message: &[u8]) -> AuthTag;

    /// Check `tag` against `message`.
    fn verify(&self, message: &[u8], tag: &AuthTag) -> bool {
        self.sign(message) == *tag
    }
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn sign(&self, message: &[u8]) -> AuthTag {
        (**self).sign(message)
    }

    fn verify(&self, message: &[u8], tag: &AuthTag) -> bool {
        (**self).verify(message, tag)
    }
}

/// Unkeyed placeholder scheme: the tag is the Blake3 digest of the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestAuthenticator;

impl Authenticator for DigestAuthenticator {
    fn sign(&self, message: &[u8]) -> AuthTag {
        AuthTag(Blake3Hash::hash(message).0)
    }

    fn verify(&self, message: &[u8], tag: &AuthTag) -> bool {
        // blake3::Hash equality is constant time
        blake3::hash(message) == blake3::Hash::from(tag.0)
    }
}

/// A 32-byte secret for keyed Blake3 tags.
#[derive(Clone)]
pub struct MacKey {
    key: [u8; 32],
}

impl MacKey {
    /// Generate a new random key.
    pub fn generate() -> Self {
        Self {
            key: rand::random(),
        }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self { key: *seed }
    }

    /// A public fingerprint of the key, safe to log.
    pub fn fingerprint(&self) -> Blake3Hash {
        Blake3Hash::hash(&self.key)
    }
}

impl Authenticator for MacKey {
    fn sign(&self, message: &[u8]) -> AuthTag {
        AuthTag(*blake3::keyed_hash(&self.key, message).as_bytes())
    }

    fn verify(&self, message: &[u8], tag: &AuthTag) -> bool {
        blake3::keyed_hash(&self.key, message) == blake3::Hash::from(tag.0)
    }
}

impl fmt::Debug for MacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacKey({:?})", self.fingerprint())
    }
}
