//! End-to-end ranking over signed batches.

use podium::{
    rank, DigestAuthenticator, Identity, PodiumError, Record, SortPolicy, Winners, WinnersConfig,
};
use podium_testkit::generators::signed_batch;
use podium_testkit::{indexed_identity, TestFixture};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_hundred_participant_ladder() -> anyhow::Result<()> {
    init_tracing();
    let fixture = TestFixture::with_seed([0x42; 32]);
    let batch = fixture.ladder::<100>();

    let result = rank(&batch, &fixture.key)?;

    assert_eq!(result.first, indexed_identity(100));
    assert_eq!(result.second, indexed_identity(99));
    assert_eq!(result.third, indexed_identity(98));
    Ok(())
}

#[test]
fn test_ladder_under_permutation_policy() -> anyhow::Result<()> {
    let fixture = TestFixture::new();
    let batch = fixture.ladder::<100>();
    let config = WinnersConfig {
        sort_policy: SortPolicy::Permutation,
    };

    let result = Winners::new(&fixture.key, config).rank(&batch)?;
    assert_eq!(
        result.to_array(),
        [indexed_identity(100), indexed_identity(99), indexed_identity(98)]
    );
    Ok(())
}

#[test]
fn test_tampered_score_rejects_batch() {
    init_tracing();
    let fixture = TestFixture::new();
    let mut batch = fixture.ladder::<100>();
    batch[17].score = 250;

    match rank(&batch, &fixture.key) {
        Err(PodiumError::Unauthenticated { index, .. }) => assert_eq!(index, 17),
        other => panic!("expected authentication failure, got {:?}", other),
    }
}

#[test]
fn test_minimum_batch_size() {
    let fixture = TestFixture::new();

    let two = fixture.batch([5, 6]);
    assert!(matches!(
        rank(&two, &fixture.key),
        Err(PodiumError::InsufficientParticipants { required: 3, got: 2 })
    ));

    let three = fixture.batch([5, 6, 7]);
    let result = rank(&three, &fixture.key).expect("three participants rank");
    assert_eq!(result.first, indexed_identity(3));
}

#[test]
fn test_ties_resolve_to_earliest_record() {
    let fixture = TestFixture::new();
    let batch = fixture.batch([7, 9, 9, 3, 9]);

    let result = rank(&batch, &fixture.key).unwrap();
    assert_eq!(
        result.to_array(),
        [indexed_identity(2), indexed_identity(3), indexed_identity(5)]
    );
}

#[test]
fn test_records_survive_json_transport() -> anyhow::Result<()> {
    let fixture = TestFixture::new();
    let batch = fixture.batch([40, 10, 30, 20]);

    let json = serde_json::to_string(&batch.to_vec())?;
    let decoded: Vec<Record> = serde_json::from_str(&json)?;
    let decoded: [Record; 4] = decoded
        .try_into()
        .map_err(|_| anyhow::anyhow!("wrong batch length"))?;

    let result = rank(&decoded, &fixture.key)?;
    assert_eq!(result.first, indexed_identity(1));
    assert_eq!(result.third, indexed_identity(4));

    let encoded = serde_json::to_string(&result)?;
    assert_eq!(serde_json::from_str::<podium::RankingResult>(&encoded)?, result);
    Ok(())
}

#[test]
fn test_placeholder_scheme_detects_tampering() {
    let mut batch: [Record; 3] = std::array::from_fn(|i| {
        Record::sign(Identity::from_bytes([i as u8; 32]), 10 * i as u8, &DigestAuthenticator)
    });
    assert!(rank(&batch, &DigestAuthenticator).is_ok());

    batch[0].score = 99;
    assert!(matches!(
        rank(&batch, &DigestAuthenticator),
        Err(PodiumError::Unauthenticated { index: 0, .. })
    ));
}

proptest! {
    #[test]
    fn test_podium_matches_reference_ranking((key, batch) in signed_batch::<12>()) {
        let result = rank(&batch, &key).unwrap();

        let mut scores: Vec<u8> = batch.iter().map(|r| r.score).collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));

        let score_of = |identity: Identity| {
            batch.iter().find(|r| r.identity == identity).map(|r| r.score)
        };
        prop_assert_eq!(
            [score_of(result.first), score_of(result.second), score_of(result.third)],
            [Some(scores[0]), Some(scores[1]), Some(scores[2])]
        );
    }

    #[test]
    fn test_any_single_tamper_is_rejected(
        (key, batch) in signed_batch::<10>(),
        slot in 0usize..10,
        delta in 1u8..=255,
    ) {
        let mut tampered = batch;
        tampered[slot].score = tampered[slot].score.wrapping_add(delta);

        let rejected = matches!(
            rank(&tampered, &key),
            Err(PodiumError::Unauthenticated { .. })
        );
        prop_assert!(rejected);
    }
}
