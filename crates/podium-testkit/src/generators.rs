//! Proptest generators for property-based testing.

use proptest::prelude::*;

use podium_core::{Identity, MacKey, Record, Score};

/// Generate a random key.
pub fn mac_key() -> impl Strategy<Value = MacKey> {
    any::<[u8; 32]>().prop_map(|seed| MacKey::from_seed(&seed))
}

/// Generate a random Identity.
pub fn identity() -> impl Strategy<Value = Identity> {
    any::<[u8; 32]>().prop_map(Identity::from_bytes)
}

/// Generate a score.
pub fn score() -> impl Strategy<Value = Score> {
    any::<Score>()
}

/// Generate a key and an `N`-record batch signed with it.
///
/// Identities are random and may collide; scores are unconstrained.
pub fn signed_batch<const N: usize>() -> impl Strategy<Value = (MacKey, [Record; N])> {
    (mac_key(), prop::collection::vec((identity(), score()), N))
        .prop_map(|(key, entries)| {
            let batch = std::array::from_fn(|i| {
                let (identity, score) = entries[i];
                Record::sign(identity, score, &key)
            });
            (key, batch)
        })
}

/// Parameters for generating a record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub seed: [u8; 32],
    pub identity: Identity,
    pub score: Score,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<[u8; 32]>(), identity(), score())
            .prop_map(|(seed, identity, score)| RecordParams {
                seed,
                identity,
                score,
            })
            .boxed()
    }
}

/// Generate a record from parameters.
pub fn record_from_params(params: &RecordParams) -> Record {
    Record::sign(params.identity, params.score, &MacKey::from_seed(&params.seed))
}
