//! Hint vs. verification cost for fixed-size batches.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use podium::{Winners, WinnersConfig};
use podium_sort::{sort_descending, verify_descending, SelectionHint, SortHint};
use podium_testkit::TestFixture;

fn scores<const N: usize>() -> [u8; N] {
    std::array::from_fn(|i| (i * 37 % 251) as u8)
}

fn bench_phases(c: &mut Criterion) {
    let input = scores::<128>();
    let candidate = SelectionHint
        .propose(&input, u8::cmp)
        .expect("selection hint always succeeds");

    c.bench_function("hint/selection_128", |b| {
        b.iter(|| SelectionHint.propose(black_box(&input), u8::cmp))
    });
    c.bench_function("verify/adjacency_128", |b| {
        b.iter(|| verify_descending(black_box(&candidate.ordered), u8::cmp))
    });
    c.bench_function("sort/descending_128", |b| {
        b.iter(|| sort_descending(black_box(input)))
    });
}

fn bench_rank(c: &mut Criterion) {
    let fixture = TestFixture::with_seed([0x42; 32]);
    let batch = fixture.ladder::<100>();
    let winners = Winners::new(fixture.key.clone(), WinnersConfig::default());

    c.bench_function("rank/ladder_100", |b| b.iter(|| winners.rank(black_box(&batch))));
}

criterion_group!(benches, bench_phases, bench_rank);
criterion_main!(benches);
