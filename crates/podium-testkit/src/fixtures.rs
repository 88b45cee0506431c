//! Test fixtures and helpers.
//!
//! Common setup for batches of signed records.

use podium_core::{Identity, MacKey, Record, Score};

/// Identity whose last four bytes hold `index` big-endian; the rest are zero.
pub fn indexed_identity(index: u32) -> Identity {
    let mut bytes = [0u8; 32];
    bytes[28..].copy_from_slice(&index.to_be_bytes());
    Identity::from_bytes(bytes)
}

/// A test fixture holding the signing key for a batch.
pub struct TestFixture {
    pub key: MacKey,
}

impl TestFixture {
    /// Create a new test fixture with a random key.
    pub fn new() -> Self {
        Self {
            key: MacKey::generate(),
        }
    }

    /// Create with a deterministic key from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            key: MacKey::from_seed(&seed),
        }
    }

    /// Sign a single record.
    pub fn record(&self, identity: Identity, score: Score) -> Record {
        Record::sign(identity, score, &self.key)
    }

    /// Sign a batch; slot `i` gets identity `indexed_identity(i + 1)`.
    pub fn batch<const N: usize>(&self, scores: [Score; N]) -> [Record; N] {
        std::array::from_fn(|i| self.record(indexed_identity(i as u32 + 1), scores[i]))
    }

    /// Sign a batch where identity `i + 1` scores `i`.
    ///
    /// Scores wrap past 255, so keep `N <= 256` for distinct scores.
    pub fn ladder<const N: usize>(&self) -> [Record; N] {
        std::array::from_fn(|i| self.record(indexed_identity(i as u32 + 1), i as Score))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_core::verify_batch;

    #[test]
    fn test_indexed_identity_layout() {
        let id = indexed_identity(0x0102_0304);
        assert_eq!(&id.as_bytes()[..28], &[0u8; 28]);
        assert_eq!(&id.as_bytes()[28..], &[1, 2, 3, 4]);
        assert_ne!(indexed_identity(1), indexed_identity(2));
    }

    #[test]
    fn test_batch_is_authentic() {
        let fixture = TestFixture::new();
        let batch = fixture.batch([9, 8, 7]);
        assert!(verify_batch(&batch, &fixture.key).is_ok());
        assert_eq!(batch[0].identity, indexed_identity(1));
    }

    #[test]
    fn test_ladder_scores() {
        let fixture = TestFixture::with_seed([3; 32]);
        let ladder = fixture.ladder::<100>();
        assert_eq!(ladder[0].score, 0);
        assert_eq!(ladder[99].score, 99);
        assert_eq!(ladder[99].identity, indexed_identity(100));
    }

    #[test]
    fn test_fixtures_with_different_seeds_disagree() {
        let a = TestFixture::with_seed([1; 32]);
        let b = TestFixture::with_seed([2; 32]);
        let record = a.record(indexed_identity(1), 5);
        assert!(!record.is_authentic(&b.key));
    }
}
