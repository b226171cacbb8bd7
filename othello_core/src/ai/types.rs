use crate::engine::board::ApplyMoveError;
use crate::engine::types::{Side, Square};

/// 対局ドライバから渡される残り持ち時間。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TimeBudget {
    /// 残りミリ秒。
    Millis(u32),
    /// 時間無制限。
    Unlimited,
}

impl TimeBudget {
    /// ドライバ形式の残り時間（負数は無制限）から生成する。
    #[inline]
    #[must_use]
    pub fn from_ms_left(ms_left: i64) -> Self {
        match u32::try_from(ms_left) {
            Ok(value) => Self::Millis(value),
            Err(_conversion_error) if ms_left < 0 => Self::Unlimited,
            Err(_conversion_error) => Self::Millis(u32::MAX),
        }
    }
}

/// 自前の盤面を保持しながら手を選択するプレイヤー。
pub trait Player {
    /// 担当する色を返す。
    fn side(&self) -> Side;

    /// 相手の直前の手を反映してから、自分の手を選択し盤面に適用する。
    ///
    /// 初手や相手がパスした場合、`opponents_move` は `None`。
    /// 自分に合法手が無い場合は `Ok(None)` を返す。
    ///
    /// # Errors
    ///
    /// 相手の手が内部盤面上で合法でない場合、`ApplyMoveError::IllegalMove` を返す。
    fn select_move(
        &mut self,
        opponents_move: Option<Square>,
        budget: TimeBudget,
    ) -> Result<Option<Square>, ApplyMoveError>;
}
