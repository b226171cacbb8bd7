//! `engine` の性能計測（合法手判定、着手適用、複製）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use othello_core::ai::minimax::enumerate::legal_moves;
use othello_core::engine::{self, Board as _};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 初期局面（黒番）での代表的な合法手を返す。
const fn initial_black_move_square() -> Option<engine::Square> {
    engine::Square::from_xy(2, 3)
}

/// `Bitboard::apply` を計測する。
fn bench_apply(criterion: &mut Criterion) {
    let Some(square) = initial_black_move_square() else {
        return;
    };

    criterion.bench_function("engine/apply_initial", |bench| {
        bench.iter_batched(
            engine::Bitboard::initial,
            |mut board| black_box(board.apply(square, engine::Side::Black)),
            BatchSize::SmallInput,
        );
    });
}

/// セル単位の合法手列挙を計測する。
fn bench_enumerate(criterion: &mut Criterion) {
    criterion.bench_function("engine/enumerate_initial", |bench| {
        bench.iter(|| {
            black_box(legal_moves(
                &engine::Bitboard::initial(),
                engine::Side::Black,
            ))
        });
    });
}

/// `Bitboard::legal_moves_for` を計測する。
fn bench_legal_moves(criterion: &mut Criterion) {
    criterion.bench_function("engine/legal_moves_initial", |bench| {
        bench.iter(|| black_box(engine::Bitboard::initial().legal_moves_for(engine::Side::Black)));
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_apply(&mut criterion);
    bench_enumerate(&mut criterion);
    bench_legal_moves(&mut criterion);

    criterion.final_summary();
}
