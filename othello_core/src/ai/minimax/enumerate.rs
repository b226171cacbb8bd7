use crate::engine::board::Board;
use crate::engine::types::{Side, Square};

/// `side` の合法手を列順（列 x が外側、行 y が内側）に列挙する。
///
/// 合法性の判定は盤面に委ねる。合法手が無ければ空の `Vec` を返す。
#[inline]
pub fn legal_moves<B: Board>(board: &B, side: Side) -> Vec<Square> {
    let mut moves = Vec::new();
    for x in u8::MIN..Square::BOARD_LEN {
        for y in u8::MIN..Square::BOARD_LEN {
            let Some(square) = Square::from_xy(x, y) else {
                continue;
            };
            if board.is_legal(square, side) {
                moves.push(square);
            }
        }
    }
    moves
}
