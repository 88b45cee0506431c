//! # Podium Core
//!
//! Pure primitives for Podium: identities, records, canonical messages and
//! the authentication check.
//!
//! This crate contains no I/O and no ranking logic.
//!
//! ## Key Types
//!
//! - [`Record`] - identity + score + tag, the unit being ranked
//! - [`Identity`] - 32-byte participant identifier
//! - [`AuthTag`] - 32-byte tag over the canonical message
//! - [`Authenticator`] - the sign/verify capability a batch is checked against
//!
//! ## Canonical Message
//!
//! Tags cover `identity || score` (33 bytes). See [`canonical`] module.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod record;
pub mod types;
pub mod validation;

pub use canonical::{canonical_message, signed_message, MESSAGE_LEN};
pub use crypto::{AuthTag, Authenticator, Blake3Hash, DigestAuthenticator, MacKey};
pub use error::AuthError;
pub use record::Record;
pub use types::{Identity, RankingResult, Score};
pub use validation::{verify_batch, verify_record};
