use crate::ai::minimax::enumerate::legal_moves;
use crate::ai::types::{Player, TimeBudget};
use crate::engine::board::{ApplyMoveError, Bitboard, Board as _};
use crate::engine::types::{Side, Square};

/// 64-bit 線形合同法 (LCG) の簡易 RNG。
/// - `seed` で決定的に再現可能
#[derive(Debug, Clone, Copy)]
struct Lcg64 {
    /// 内部状態。
    state: u64,
}

impl Lcg64 {
    /// LCG の内部状態を `seed` から初期化する。
    #[inline]
    const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// 次の u32 を生成する（上位 32bit を返す）。
    #[inline]
    fn next_u32(&mut self) -> u32 {
        const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
        const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        u32::try_from(self.state >> 32).unwrap_or(u32::MAX)
    }
}

/// 合法手からランダムに1手を選択するプレイヤー。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 自分が管理する盤面。
    board: Bitboard,
    /// 乱数生成器。
    rng: Lcg64,
    /// 担当する色。
    side: Side,
}

impl Agent {
    /// 現在の内部盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> Bitboard {
        self.board
    }

    /// 担当色と `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub const fn new(side: Side, seed: u64) -> Self {
        Self {
            board: Bitboard::initial(),
            rng: Lcg64::new(seed),
            side,
        }
    }
}

impl Player for Agent {
    #[inline]
    fn side(&self) -> Side {
        self.side
    }

    #[inline]
    fn select_move(
        &mut self,
        opponents_move: Option<Square>,
        _budget: TimeBudget,
    ) -> Result<Option<Square>, ApplyMoveError> {
        if let Some(square) = opponents_move {
            self.board.apply(square, self.side.opponent())?;
        }

        let moves = legal_moves(&self.board, self.side);
        let Some(&choice) = moves.get(choose_index(moves.len(), self.rng.next_u32())) else {
            return Ok(None);
        };

        self.board.apply(choice, self.side)?;
        Ok(Some(choice))
    }
}

/// `len` 個の候補から `random` に基づき1つのインデックスを選ぶ。
fn choose_index(len: usize, random: u32) -> usize {
    let len_u64 = u64::try_from(len).unwrap_or(u64::MAX);
    let product = u64::from(random).wrapping_mul(len_u64);
    let high_u64 = product.wrapping_shr(32);
    usize::try_from(high_u64).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::{Agent, choose_index};
    use crate::ai::types::{Player as _, TimeBudget};
    use crate::engine::board::Board as _;
    use crate::engine::types::Side;

    #[test]
    fn choose_index_stays_in_range() {
        for random in [0_u32, 1, u32::MAX / 2, u32::MAX] {
            assert!(choose_index(4, random) < 4);
        }
        assert_eq!(choose_index(0, u32::MAX), 0);
    }

    #[test]
    fn same_seed_gives_same_move() {
        let mut first = Agent::new(Side::Black, 7);
        let mut second = Agent::new(Side::Black, 7);
        assert_eq!(
            first.select_move(None, TimeBudget::Unlimited),
            second.select_move(None, TimeBudget::Unlimited)
        );
    }

    #[test]
    fn selected_move_is_applied_to_internal_board() {
        let mut agent = Agent::new(Side::Black, 3);
        let chosen = agent.select_move(None, TimeBudget::Unlimited);
        assert!(matches!(chosen, Ok(Some(_))));
        assert_eq!(agent.board().piece_count(Side::Black), 4);
    }
}
