use crate::engine::board::{ApplyMoveError, Board};
use crate::engine::types::{Side, Square};

use super::context::SearchContext;
use super::enumerate::legal_moves;
use super::weights::weights;

/// 直前の着手をどちらが行ったか。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Role {
    /// 自分が着手した（次は相手が応手する）。
    Agent,
    /// 相手が着手した（次は自分が応手する）。
    Opponent,
}

impl Role {
    /// 子ノードの値をまとめる。
    ///
    /// 自分の手の下では相手の最善応手（最小値）、相手の手の下では自分の最善応手（最大値）を取る。
    pub(super) fn combine(self, current: i32, child: i32) -> i32 {
        match self {
            Self::Agent => current.min(child),
            Self::Opponent => current.max(child),
        }
    }

    /// 次の手番の役割を返す。
    pub(super) const fn next(self) -> Self {
        match self {
            Self::Agent => Self::Opponent,
            Self::Opponent => Self::Agent,
        }
    }
}

/// 自分から見た石差を返す。
pub(super) fn differential<B: Board>(board: &B, agent: Side) -> i32 {
    let own = i32::try_from(board.piece_count(agent)).unwrap_or(i32::MAX);
    let other = i32::try_from(board.piece_count(agent.opponent())).unwrap_or(i32::MAX);
    own.wrapping_sub(other)
}

/// 葉の評価（石差 + 位置ボーナス）。
pub(super) fn leaf_score<B: Board>(board: &B, square: Square, agent: Side) -> i32 {
    let base = differential(board, agent);
    base.wrapping_add(weights(square, base))
}

/// `square` を `role` 側が打った後の局面値を返す（固定深さミニマックス）。
///
/// `board` は着手前の局面で、ここでは変更しない。着手は複製した盤面に対して行い、
/// その複製を子ノードへ渡す（子はさらに自分用に複製する）。
///
/// 次の手番側に合法手が無いとき、または `depth` が 0 のときは葉の評価を返す。
/// 列挙した応手が空だった場合も葉として扱う。
///
/// # Errors
///
/// `square` が `board` 上で合法でない場合、`ApplyMoveError::IllegalMove` を返す。
pub(super) fn search<B: Board>(
    square: Square,
    depth: u8,
    board: &B,
    role: Role,
    ctx: &mut SearchContext,
) -> Result<i32, ApplyMoveError> {
    ctx.stats_mut().inc_nodes();

    let mut next = board.clone();
    next.apply(square, ctx.side_of(role))?;

    let next_role = role.next();
    let next_side = ctx.side_of(next_role);
    if !next.has_any_legal_move(next_side) || depth == u8::MIN {
        ctx.stats_mut().inc_leaves();
        return Ok(leaf_score(&next, square, ctx.agent()));
    }

    let child_depth = depth.saturating_sub(1);
    let mut combined: Option<i32> = None;
    for reply in legal_moves(&next, next_side) {
        let value = search(reply, child_depth, &next, next_role, ctx)?;
        combined = Some(combined.map_or(value, |current| role.combine(current, value)));
    }

    match combined {
        Some(value) => Ok(value),
        None => {
            ctx.stats_mut().inc_leaves();
            Ok(leaf_score(&next, square, ctx.agent()))
        }
    }
}
