//! Criterion benchmarks for prize draws and round starts.
//!
//! Run with:
//!     cargo bench --bench draw

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use pick_a_box::brands;
use pick_a_box::core::GameRng;
use pick_a_box::prizes::{Prize, PrizeCatalog, PrizeId, PrizeKind, Tier, WeightTable};
use pick_a_box::round::RoundEngine;

fn wide_catalog(entries: u32) -> PrizeCatalog {
    let prizes = (0..entries)
        .map(|i| {
            let kind = if i % 2 == 0 { PrizeKind::Prize } else { PrizeKind::TryAgain };
            Prize::new(PrizeId::new(i), kind, format!("Prize {}", i)).with_tier(Tier::ALL[i as usize % 3])
        })
        .collect();
    let weights = WeightTable::new()
        .with_weight(Tier::High, 1)
        .with_weight(Tier::Medium, 3)
        .with_weight(Tier::Low, 6);
    PrizeCatalog::new(prizes, weights).expect("bench catalog is valid")
}

fn bench_draw_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_one");
    for entries in [6u32, 64, 1024] {
        let catalog = wide_catalog(entries);
        let mut rng = GameRng::new(42);
        group.bench_with_input(BenchmarkId::from_parameter(entries), &catalog, |b, catalog| {
            b.iter(|| catalog.draw_one(&mut rng).id)
        });
    }
    group.finish();
}

fn bench_round(c: &mut Criterion) {
    let catalog = brands::default_brand().catalog().expect("default brand is valid");
    let mut engine = RoundEngine::seeded(catalog, 42);
    c.bench_function("start_select_6_boxes", |b| {
        b.iter(|| {
            engine.start(6).expect("six boxes");
            engine.select(3).expect("in range").map(|p| p.id)
        })
    });
}

criterion_group!(benches, bench_draw_one, bench_round);
criterion_main!(benches);
