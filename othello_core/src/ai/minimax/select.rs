use tracing::debug;

use crate::engine::board::{ApplyMoveError, Board};
use crate::engine::types::{Side, Square};

use super::context::SearchContext;
use super::enumerate::legal_moves;
use super::search::{Role, differential, search};
use super::weights::weights;

/// 相手が応手できないルート手の最悪値（到達し得るどの石差よりも大きい）。
const NO_REPLY: i32 = i32::MAX;

/// これまでで最も良い候補。
///
/// 最初の候補で埋まり、以降は厳密に大きいスコアのときだけ置き換わる
/// （同点なら先に列挙された候補が残る）。
#[derive(Clone, Copy, Debug)]
pub(super) struct Best<T> {
    /// （スコア, 候補）。
    entry: Option<(i32, T)>,
}

impl<T> Best<T> {
    /// 候補を取り出す。
    pub(super) fn into_item(self) -> Option<T> {
        self.entry.map(|(_, item)| item)
    }

    /// 空の状態で生成する。
    pub(super) const fn new() -> Self {
        Self { entry: None }
    }

    /// 候補を提示し、厳密に良ければ採用する。
    pub(super) fn offer(&mut self, score: i32, item: T) {
        if self.entry.as_ref().is_none_or(|&(best, _)| score > best) {
            self.entry = Some((score, item));
        }
    }

    /// 現在のスコアを返す。
    pub(super) fn score(&self) -> Option<i32> {
        self.entry.as_ref().map(|&(score, _)| score)
    }
}

/// ルートの全合法手を探索し、最も良い手を返す（盤面は変更しない）。
///
/// 各手の値は探索値に `weights(手, 探索値 / 2)` を加えたもの。
pub(super) fn select_root<B: Board>(
    board: &B,
    ctx: &mut SearchContext,
) -> Result<Option<Square>, ApplyMoveError> {
    let mut best = Best::new();

    for square in legal_moves(board, ctx.agent()) {
        let value = search(square, ctx.max_depth(), board, Role::Agent, ctx)?;
        let combined = value.wrapping_add(weights(square, value.wrapping_div(2)));
        debug!(square = %square, value, combined, "root candidate");
        best.offer(combined, square);
    }

    debug!(score = ?best.score(), "root search finished");
    Ok(best.into_item())
}

/// 2手読みの簡易選択（テストモード用）。
///
/// 各ルート手について相手の全応手を試し、最悪の石差が最も良い手を返す。
/// 相手に応手が無い手は、応手のあるどの手よりも上に置く。
pub(super) fn select_two_ply<B: Board>(
    board: &B,
    agent: Side,
) -> Result<Option<Square>, ApplyMoveError> {
    let opponent = agent.opponent();
    let mut best = Best::new();

    for square in legal_moves(board, agent) {
        let mut after = board.clone();
        after.apply(square, agent)?;

        let mut worst: Option<i32> = None;
        for reply in legal_moves(&after, opponent) {
            let mut replied = after.clone();
            replied.apply(reply, opponent)?;
            let diff = differential(&replied, agent);
            worst = Some(worst.map_or(diff, |current| current.min(diff)));
        }

        let worst = worst.unwrap_or(NO_REPLY);
        debug!(square = %square, worst, "two-ply candidate");
        best.offer(worst, square);
    }

    Ok(best.into_item())
}
