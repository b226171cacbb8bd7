/// 盤面（ビットボード）と合法手/反転処理の実装。
pub mod board;
/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
pub mod types;

pub type Bitboard = board::Bitboard;
pub type Game = game::Game;
pub type Side = types::Side;
pub type Square = types::Square;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
pub type ApplyMoveError = board::ApplyMoveError;

pub use board::Board;
