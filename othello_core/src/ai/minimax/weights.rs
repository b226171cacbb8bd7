use crate::engine::types::Square;

/// 盤の最後の列/行。
const LAST: u8 = Square::BOARD_LEN - 1;

/// 角に隣接する列/行（内側）。
const NEAR_LAST: u8 = Square::BOARD_LEN - 2;

/// 角の倍率。
const CORNER: i32 = 3;

/// 辺の倍率。
const EDGE: i32 = 2;

/// 角の隣（辺上・斜め）の倍率。
const NEAR_CORNER: i32 = -3;

/// 着手位置に応じたボーナス/ペナルティを返す。
///
/// 大きさは `|base|` に比例し、符号は位置だけで決まる。
/// 角は `+3`、角に接するマスは `-3`、それ以外の辺は `+2`、内側は `0` 倍。
#[inline]
#[must_use]
pub fn weights(square: Square, base: i32) -> i32 {
    let x = square.x();
    let y = square.y();
    let magnitude = base.wrapping_abs();

    let factor = if x == 0 || x == LAST {
        if y == 0 || y == LAST {
            CORNER
        } else if y == 1 || y == NEAR_LAST {
            NEAR_CORNER
        } else {
            EDGE
        }
    } else if (y == 0 || y == LAST) && (x == 1 || x == NEAR_LAST) {
        NEAR_CORNER
    } else if y == 0 || y == LAST {
        // ここに来る x は 2..=5。
        EDGE
    } else if (x == 1 || x == NEAR_LAST) && (y == 1 || y == NEAR_LAST) {
        NEAR_CORNER
    } else {
        0
    };

    factor.wrapping_mul(magnitude)
}
