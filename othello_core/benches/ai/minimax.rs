//! `ai::minimax` の性能計測（深さ別の1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use othello_core::ai::minimax::{self, Config};
use othello_core::ai::{Player, TimeBudget, random};
use othello_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 乱数同士で指定手数だけ進め、黒番の局面と白の直前手を返す。
fn position_after_plies(plies: u16) -> (engine::Bitboard, Option<engine::Square>) {
    let mut black = random::Agent::new(engine::Side::Black, u64::MIN);
    let mut white = random::Agent::new(engine::Side::White, u64::MIN.wrapping_add(1));
    let mut last = None;

    for _turn in u16::MIN..plies {
        let black_move = black.select_move(last, TimeBudget::Unlimited).unwrap_or_default();
        last = white
            .select_move(black_move, TimeBudget::Unlimited)
            .unwrap_or_default();
    }

    (black.board(), last)
}

/// `minimax::Agent::select_move` を深さ別に計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let (board, last) = position_after_plies(6);
    let mut group = criterion.benchmark_group("ai/minimax/select_move");
    group.sample_size(10);

    for depth in [1_u8, 3, minimax::MAX_DEPTH] {
        let bench_id = BenchmarkId::new("depth", depth);
        group.bench_with_input(bench_id, &depth, |bench, &input| {
            bench.iter_batched(
                || {
                    minimax::Agent::with_board(engine::Side::Black, board)
                        .with_config(Config::default().with_max_depth(input))
                },
                |mut agent| black_box(agent.select_move(last, TimeBudget::Unlimited)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
