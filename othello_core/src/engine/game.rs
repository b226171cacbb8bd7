use crate::engine::board::{ApplyMoveError, Bitboard, Board as _};
use crate::engine::types::{Side, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（双方パス）。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 進行中。
    InProgress,
}

/// 手の適用（打つ/パス）に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 指定マスが合法手ではない。
    IllegalMove,
    /// 合法手があるのにパスしようとした。
    PassNotAllowed,
}

impl core::fmt::Display for PlayError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GameOver => f.write_str("game is already over"),
            Self::IllegalMove => f.write_str("square is not a legal move"),
            Self::PassNotAllowed => f.write_str("cannot pass while a legal move exists"),
        }
    }
}

impl core::error::Error for PlayError {}

impl From<ApplyMoveError> for PlayError {
    #[inline]
    fn from(err: ApplyMoveError) -> Self {
        match err {
            ApplyMoveError::IllegalMove => Self::IllegalMove,
        }
    }
}

/// 1ゲームの進行（手番とパス）を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Bitboard,
    /// 連続パス回数。
    consecutive_passes: u8,
    /// 手番。
    side_to_move: Side,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(self) -> Bitboard {
        self.board
    }

    /// 初期局面（黒番）からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Bitboard::initial(),
            consecutive_passes: u8::MIN,
            side_to_move: Side::Black,
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(self) -> bool {
        if self.consecutive_passes >= 2 {
            return true;
        }

        if self.board.has_any_legal_move(self.side_to_move) {
            return false;
        }

        !self.board.has_any_legal_move(self.side_to_move.opponent())
    }

    /// 1手（打つ/パス）を適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが合法手でない場合
    /// - `PlayError::PassNotAllowed`: 合法手が存在するのにパスを試みた場合
    ///
    #[inline]
    pub fn play(&mut self, mv: Option<Square>) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        if let Some(square) = mv {
            self.board.apply(square, self.side_to_move)?;
            self.consecutive_passes = u8::MIN;
        } else {
            if self.board.has_any_legal_move(self.side_to_move) {
                return Err(PlayError::PassNotAllowed);
            }

            self.consecutive_passes = self.consecutive_passes.saturating_add(1);
        }

        self.side_to_move = self.side_to_move.opponent();
        Ok(self.status())
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(self) -> Side {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(self) -> Status {
        if self.is_game_over() {
            let (black, white) = self.board.counts();
            return Status::GameOver { black, white };
        }

        Status::InProgress
    }
}
