use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_hand::cards::ParseOptions;
use poker_hand::deck::Deck;
use poker_hand::evaluator::{classify, classify_hand};
use poker_hand::hand::Hand;

fn bench_classify_tokens(c: &mut Criterion) {
    let high_card = ["KD", "5H", "2D", "10C", "JH"];
    let royal = ["KH", "AH", "QH", "JH", "10H"];

    let mut g = c.benchmark_group("classify");
    g.bench_with_input(BenchmarkId::new("high_card", "K,J,10,5,2"), &high_card, |b, input| {
        b.iter(|| classify(black_box(input), ParseOptions::default()))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "A-K-Q-J-10"), &royal, |b, input| {
        b.iter(|| classify(black_box(input), ParseOptions::default()))
    });
    g.finish();
}

fn bench_classify_hands(c: &mut Criterion) {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(42);
    let hands: Vec<Hand> = (0..10).filter_map(|_| deck.deal_hand()).collect();
    c.bench_function("classify_hand x10", |b| {
        b.iter(|| hands.iter().map(|h| classify_hand(black_box(h)).score() as u32).sum::<u32>())
    });
}

criterion_group!(benches, bench_classify_tokens, bench_classify_hands);
criterion_main!(benches);
