use std::time::Instant;

use tracing::{debug, info};

use crate::ai::types::{Player, TimeBudget};
use crate::engine::board::{ApplyMoveError, Bitboard, Board};
use crate::engine::types::{Side, Square};

use self::context::SearchContext;
use self::select::{select_root, select_two_ply};

mod context;
/// 合法手の列挙。
pub mod enumerate;
mod search;
mod select;
/// 着手位置の重み。
pub mod weights;

#[cfg(test)]
mod mock;

/// ルート手の下で読む残り深さ（ply）。
pub const MAX_DEPTH: u8 = 5;

/// プレイヤーの設定。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct Config {
    /// ルート手の下で読む残り深さ（ply）。
    pub max_depth: u8,
    /// `true` の場合、2手読みの簡易選択を使う。
    pub test_mode: bool,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            test_mode: false,
        }
    }
}

impl Config {
    /// 探索深さを差し替えた設定を返す。
    #[inline]
    #[must_use]
    pub const fn with_max_depth(self, max_depth: u8) -> Self {
        Self {
            max_depth,
            test_mode: self.test_mode,
        }
    }
}

/// 固定深さミニマックスで手を選ぶプレイヤー。
///
/// 対局中の盤面を1つ保持し、相手の手と自分の手だけをそこへ適用する。
/// 探索自体は盤面の複製上で行う。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent<B: Board = Bitboard> {
    /// 対局中の盤面。
    board: B,
    /// 設定。
    config: Config,
    /// 担当する色。
    side: Side,
}

impl Agent<Bitboard> {
    /// 初期局面で `side` を担当するプレイヤーを生成する。
    #[inline]
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self::with_board(side, Bitboard::initial())
    }
}

impl<B: Board> Agent<B> {
    /// 対局中の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &B {
        &self.board
    }

    /// 設定を返す。
    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// テストモードかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_test_mode(&self) -> bool {
        self.config.test_mode
    }

    /// テストモード（2手読みの簡易選択）を切り替える。
    #[inline]
    pub const fn set_test_mode(&mut self, enabled: bool) {
        self.config.test_mode = enabled;
    }

    /// 任意の盤面から `side` を担当するプレイヤーを生成する。
    #[inline]
    #[must_use]
    pub fn with_board(side: Side, board: B) -> Self {
        Self {
            board,
            config: Config::default(),
            side,
        }
    }

    /// 設定を差し替える。
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

impl<B: Board> Player for Agent<B> {
    #[inline]
    fn side(&self) -> Side {
        self.side
    }

    #[inline]
    fn select_move(
        &mut self,
        opponents_move: Option<Square>,
        budget: TimeBudget,
    ) -> Result<Option<Square>, ApplyMoveError> {
        let started = Instant::now();

        if let Some(square) = opponents_move {
            self.board.apply(square, self.side.opponent())?;
        }

        if !self.board.has_any_legal_move(self.side) {
            debug!(side = ?self.side, "no legal move");
            return Ok(None);
        }

        let (chosen, nodes) = if self.config.test_mode {
            (select_two_ply(&self.board, self.side)?, None)
        } else {
            let mut ctx = SearchContext::new(self.side, self.config.max_depth);
            let chosen = select_root(&self.board, &mut ctx)?;
            let stats = ctx.stats();
            debug!(nodes = stats.nodes(), leaves = stats.leaves(), "search stats");
            (chosen, Some(stats.nodes()))
        };

        let Some(square) = chosen else {
            return Ok(None);
        };
        self.board.apply(square, self.side)?;

        info!(
            side = ?self.side,
            square = %square,
            nodes = ?nodes,
            elapsed = ?started.elapsed(),
            budget = ?budget,
            "move selected"
        );
        Ok(Some(square))
    }
}
