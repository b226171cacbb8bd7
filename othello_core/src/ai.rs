/// 固定深さミニマックス探索AI。
pub mod minimax;
/// 合法手からランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub type TimeBudget = types::TimeBudget;
pub use types::Player;
