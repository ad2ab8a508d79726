use criterion::{criterion_group, criterion_main, Criterion};
use election_ai::Strategy;
use election_runtime::{run_game, StrategyDecider};

fn bench_autoplay(c: &mut Criterion) {
    let table = election_core::builtin_scenarios();
    c.bench_function("autoplay full game", |b| {
        b.iter(|| {
            let mut decider = StrategyDecider::new(Strategy::MaxApproval);
            let _ = run_game(&table, &mut decider, &mut std::io::sink());
        })
    });
}

criterion_group!(benches, bench_autoplay);
criterion_main!(benches);
