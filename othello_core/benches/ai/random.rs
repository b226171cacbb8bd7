//! `ai::random` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use othello_core::ai::{Player as _, TimeBudget, random};
use othello_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    criterion.bench_function("ai/random/select_move_initial", |bench| {
        bench.iter_batched(
            || random::Agent::new(engine::Side::Black, u64::MIN),
            |mut agent| black_box(agent.select_move(None, TimeBudget::Unlimited)),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
