use crate::engine::types::{Side, Square};

/// A列（x = 0）のマスク。
const FILE_A: u64 = 0x0101_0101_0101_0101;

/// H列（x = 7）のマスク。
const FILE_H: u64 = 0x8080_8080_8080_8080;

/// 盤面の拡張（Kogge-Stone）を行う反復回数。
const SPREAD_STEPS: u8 = 5;

/// 1ビット分のシフト量。
const SHIFT_1: u32 = 1;

/// 7ビット分のシフト量。
const SHIFT_7: u32 = 7;

/// 8ビット分のシフト量。
const SHIFT_8: u32 = 8;

/// 9ビット分のシフト量。
const SHIFT_9: u32 = 9;

/// 初期配置（黒）: (4, 3) と (3, 4)。
const START_BLACK: u64 = (1 << 28) | (1 << 35);

/// 初期配置（白）: (3, 3) と (4, 4)。
const START_WHITE: u64 = (1 << 27) | (1 << 36);

/// 1方向へのシフト関数。
type Shift = fn(u64) -> u64;

/// 8方向のシフト関数。
const DIRECTIONS: [Shift; 8] = [
    shift_e, shift_n, shift_ne, shift_nw, shift_s, shift_se, shift_sw, shift_w,
];

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ApplyMoveError {
    /// 指定マスが合法手ではない。
    IllegalMove,
}

impl core::fmt::Display for ApplyMoveError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IllegalMove => f.write_str("square is not a legal move"),
        }
    }
}

impl core::error::Error for ApplyMoveError {}

/// 探索が利用する盤面の操作。
///
/// 探索の各ノードは `Clone::clone` で盤面を複製してから着手するため、
/// 実装は参照共有ではなく値としてのコピーを返すこと。
pub trait Board: Clone {
    /// `side` が `square` に着手できるかを返す。
    fn is_legal(&self, square: Square, side: Side) -> bool;

    /// `side` の着手を盤面に適用する。
    ///
    /// # Errors
    ///
    /// 合法手でない場合は `ApplyMoveError::IllegalMove` を返し、盤面は変更しない。
    fn apply(&mut self, square: Square, side: Side) -> Result<(), ApplyMoveError>;

    /// `side` に合法手が1つでもあるかを返す。
    fn has_any_legal_move(&self, side: Side) -> bool;

    /// `side` の石数を返す。
    fn piece_count(&self, side: Side) -> u32;
}

/// ビットボードによる盤面（手番は持たない）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Bitboard {
    /// 黒石のビットボード。
    black: u64,
    /// 白石のビットボード。
    white: u64,
}

impl Default for Bitboard {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl Bitboard {
    /// 黒石のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn black(self) -> u64 {
        self.black
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub const fn counts(self) -> (u32, u32) {
        (self.black.count_ones(), self.white.count_ones())
    }

    /// 生のビットボードから盤面を生成する。
    ///
    /// `black` と `white` が重なっている場合は `None`。
    #[inline]
    #[must_use]
    pub const fn from_raw(black: u64, white: u64) -> Option<Self> {
        if black & white != u64::MIN {
            return None;
        }

        Some(Self { black, white })
    }

    /// 初期局面を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            black: START_BLACK,
            white: START_WHITE,
        }
    }

    /// 指定手番の合法手ビットボードを返す。
    #[inline]
    #[must_use]
    pub fn legal_moves_for(self, side: Side) -> u64 {
        let (player, opponent) = self.split(side);
        legal_moves(player, opponent)
    }

    /// 盤面の占有ビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn occupied(self) -> u64 {
        self.black | self.white
    }

    /// 指定マスの石を返す。
    #[inline]
    #[must_use]
    pub fn piece_at(self, square: Square) -> Option<Side> {
        let mask = square.bit();
        if self.black & mask != u64::MIN {
            Some(Side::Black)
        } else if self.white & mask != u64::MIN {
            Some(Side::White)
        } else {
            None
        }
    }

    /// （手番側, 相手側）のビットボードを返す。
    const fn split(self, side: Side) -> (u64, u64) {
        match side {
            Side::Black => (self.black, self.white),
            Side::White => (self.white, self.black),
        }
    }

    /// 白石のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn white(self) -> u64 {
        self.white
    }
}

impl Board for Bitboard {
    #[inline]
    fn is_legal(&self, square: Square, side: Side) -> bool {
        self.legal_moves_for(side) & square.bit() != u64::MIN
    }

    #[inline]
    fn apply(&mut self, square: Square, side: Side) -> Result<(), ApplyMoveError> {
        if !self.is_legal(square, side) {
            return Err(ApplyMoveError::IllegalMove);
        }

        let (player, opponent) = self.split(side);
        let flipped = flips(player, opponent, square);
        let next_player = player | square.bit() | flipped;
        let next_opponent = opponent & !flipped;

        match side {
            Side::Black => {
                self.black = next_player;
                self.white = next_opponent;
            }
            Side::White => {
                self.white = next_player;
                self.black = next_opponent;
            }
        }

        Ok(())
    }

    #[inline]
    fn has_any_legal_move(&self, side: Side) -> bool {
        self.legal_moves_for(side) != u64::MIN
    }

    #[inline]
    fn piece_count(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black.count_ones(),
            Side::White => self.white.count_ones(),
        }
    }
}

impl core::fmt::Display for Bitboard {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("  a b c d e f g h\n")?;
        for y in 0..Square::BOARD_LEN {
            write!(f, "{}", y.wrapping_add(1))?;
            for x in 0..Square::BOARD_LEN {
                let cell = match Square::from_xy(x, y).and_then(|sq| self.piece_at(sq)) {
                    Some(Side::Black) => 'X',
                    Some(Side::White) => 'O',
                    None => '.',
                };
                write!(f, " {cell}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// 反転させる石の集合を返す（全方向）。
fn flips(player: u64, opponent: u64, mv: Square) -> u64 {
    let mv_bb = mv.bit();
    DIRECTIONS
        .iter()
        .fold(u64::MIN, |acc, &shift| acc | flips_in_dir(player, opponent, mv_bb, shift))
}

/// 反転させる石の集合を返す（1方向）。
fn flips_in_dir(player: u64, opponent: u64, mv: u64, shift: Shift) -> u64 {
    let x1 = shift(mv) & opponent;
    if x1 == u64::MIN {
        return u64::MIN;
    }

    let x = spread(x1, opponent, shift);
    if shift(x) & player != u64::MIN {
        x
    } else {
        u64::MIN
    }
}

/// 合法手の集合を返す。
fn legal_moves(player: u64, opponent: u64) -> u64 {
    let empty = !(player | opponent);
    DIRECTIONS
        .iter()
        .fold(u64::MIN, |acc, &shift| acc | moves_in_dir(player, opponent, empty, shift))
}

/// ある方向における合法手の集合を返す。
fn moves_in_dir(player: u64, opponent: u64, empty: u64, shift: Shift) -> u64 {
    let x1 = shift(player) & opponent;
    if x1 == u64::MIN {
        return u64::MIN;
    }

    let x = spread(x1, opponent, shift);
    shift(x) & empty
}

/// 東方向へシフトする。
#[inline]
const fn shift_e(bb: u64) -> u64 {
    (bb & !FILE_H).wrapping_shl(SHIFT_1)
}

/// 北方向へシフトする。
#[inline]
const fn shift_n(bb: u64) -> u64 {
    bb.wrapping_shl(SHIFT_8)
}

/// 北東方向へシフトする。
#[inline]
const fn shift_ne(bb: u64) -> u64 {
    (bb & !FILE_H).wrapping_shl(SHIFT_9)
}

/// 北西方向へシフトする。
#[inline]
const fn shift_nw(bb: u64) -> u64 {
    (bb & !FILE_A).wrapping_shl(SHIFT_7)
}

/// 南方向へシフトする。
#[inline]
const fn shift_s(bb: u64) -> u64 {
    bb.wrapping_shr(SHIFT_8)
}

/// 南東方向へシフトする。
#[inline]
const fn shift_se(bb: u64) -> u64 {
    (bb & !FILE_H).wrapping_shr(SHIFT_7)
}

/// 南西方向へシフトする。
#[inline]
const fn shift_sw(bb: u64) -> u64 {
    (bb & !FILE_A).wrapping_shr(SHIFT_9)
}

/// 西方向へシフトする。
#[inline]
const fn shift_w(bb: u64) -> u64 {
    (bb & !FILE_A).wrapping_shr(SHIFT_1)
}

/// Kogge-Stone法の拡張処理。
fn spread(mut x: u64, opponent: u64, shift: Shift) -> u64 {
    for _ in u8::MIN..SPREAD_STEPS {
        x |= shift(x) & opponent;
    }
    x
}
