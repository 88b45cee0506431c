//! Golden test vectors for the canonical message and both tag schemes.
//!
//! Any implementation that signs Podium records must reproduce these bytes.

use podium_core::{canonical_message, Authenticator, DigestAuthenticator, Identity, MacKey, Score};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Record identity.
    pub identity: [u8; 32],
    /// Record score.
    pub score: Score,
    /// Seed for the keyed scheme.
    pub mac_seed: [u8; 32],
    /// Expected canonical message (hex).
    pub expected_message: &'static str,
    /// Expected unkeyed digest tag (hex).
    pub expected_digest_tag: &'static str,
    /// Expected keyed tag (hex).
    pub expected_mac_tag: &'static str,
}

const COUNTING: [u8; 32] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f,
];

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "repeated identity, small score",
            identity: [0x42; 32],
            score: 7,
            mac_seed: [0x42; 32],
            expected_message: "424242424242424242424242424242424242424242424242424242424242424207",
            expected_digest_tag: "566fa569b9197a851bb44011246b196fbf731b239b79d9d7e2de5a01403d2d57",
            expected_mac_tag: "100d2be915863a5e27f68c2523f9cc67780faf861024291e3964f0fc39a18191",
        },
        GoldenVector {
            name: "counting identity, max score",
            identity: COUNTING,
            score: 255,
            mac_seed: [0x00; 32],
            expected_message: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1fff",
            expected_digest_tag: "99be42087163ed4815c0992e1279181be7fc3319ff2a50bc379d1862c3ed7a5c",
            expected_mac_tag: "8c9f8629c9e25a41752e19f791ff6dd3b40bccf17f5a9fa380b571d1cc3bfe41",
        },
        GoldenVector {
            name: "zero identity, zero score",
            identity: [0x00; 32],
            score: 0,
            mac_seed: [0x01; 32],
            expected_message: "000000000000000000000000000000000000000000000000000000000000000000",
            expected_digest_tag: "232b17a92a13d46fdeeba07519406dcdad6d67b7399159364b5e26af0ab95bcf",
            expected_mac_tag: "35f7d69e9819159003c652363da51a159c29fb054eadbc5a030f44b43b25a02b",
        },
    ]
}

/// Outputs computed for a vector: (message, digest tag, mac tag), all hex.
pub fn compute_vector(vector: &GoldenVector) -> (String, String, String) {
    let message = canonical_message(&Identity::from_bytes(vector.identity), vector.score);
    let digest = DigestAuthenticator.sign(&message);
    let mac = MacKey::from_seed(&vector.mac_seed).sign(&message);
    (hex::encode(message), digest.to_hex(), mac.to_hex())
}

/// Check every vector; returns `(name, matches)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|v| {
            let (message, digest, mac) = compute_vector(v);
            let matches = message == v.expected_message
                && digest == v.expected_digest_tag
                && mac == v.expected_mac_tag;
            (v.name.to_string(), matches)
        })
        .collect()
}
