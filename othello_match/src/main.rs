//! ミニマックス・プレイヤーと乱数プレイヤーを対戦させる対局ドライバ。
//!
//! 使い方: `othello_match [games] [seed] [depth] [--test-mode] [--verbose]`

use othello_core::ai::minimax::{self, Config};
use othello_core::ai::{Player, TimeBudget, random};
use othello_core::engine;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, warn};

/// 1局あたりの持ち時間（ミリ秒）。
const GAME_TIME_MS: i64 = 60_000;

/// 1局あたりの手番上限（パスを含む）。
const TURN_LIMIT: u16 = 200;

/// コマンドライン引数から組み立てた対局設定。
#[derive(Debug)]
struct MatchConfig {
    /// ミニマックスの探索深さ。
    depth: u8,
    /// 対局数。
    games: u32,
    /// 乱数プレイヤーの seed。
    seed: u64,
    /// 2手読みモードを使うか。
    test_mode: bool,
    /// デバッグログを出すか。
    verbose: bool,
}

/// 引数の解釈に失敗した理由。
#[derive(Debug)]
enum ArgError {
    /// 数値として読めない引数。
    NotANumber(String),
    /// 位置引数が多すぎる。
    TooManyArguments(String),
}

impl core::fmt::Display for ArgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotANumber(arg) => write!(f, "expected a number, got `{arg}`"),
            Self::TooManyArguments(arg) => write!(f, "unexpected argument `{arg}`"),
        }
    }
}

impl MatchConfig {
    /// 引数列（プログラム名を除く）から設定を組み立てる。
    fn from_args<I: Iterator<Item = String>>(args: I) -> Result<Self, ArgError> {
        let mut config = Self {
            depth: minimax::MAX_DEPTH,
            games: 1,
            seed: 0,
            test_mode: false,
            verbose: false,
        };
        let mut position = 0_u8;

        for arg in args {
            match arg.as_str() {
                "--test-mode" => config.test_mode = true,
                "--verbose" => config.verbose = true,
                _ => {
                    match position {
                        0 => config.games = parse_number(&arg)?,
                        1 => config.seed = parse_number(&arg)?,
                        2 => config.depth = parse_number(&arg)?,
                        _ => return Err(ArgError::TooManyArguments(arg)),
                    }
                    position = position.saturating_add(1);
                }
            }
        }

        Ok(config)
    }
}

/// 数値の位置引数を読む。
fn parse_number<T: core::str::FromStr>(arg: &str) -> Result<T, ArgError> {
    arg.parse().map_err(|_err| ArgError::NotANumber(arg.to_owned()))
}

/// ログ出力（JSON）を初期化する。
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// 1局の結果。
#[derive(Debug)]
enum Outcome {
    /// 終局した（黒・白の石数）。
    Finished { black: u32, white: u32 },
    /// どちらかの手が不正だった。
    Forfeit(engine::Side),
}

/// 残り時間を差し引く。
fn charge(remaining_ms: &mut i64, started: Instant) {
    let spent = i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX);
    *remaining_ms = remaining_ms.saturating_sub(spent);
}

/// 1局を終局まで進める。
fn play_game(black: &mut dyn Player, white: &mut dyn Player) -> Outcome {
    let mut game = engine::Game::initial();
    let mut last_move: Option<engine::Square> = None;
    let mut black_ms = GAME_TIME_MS;
    let mut white_ms = GAME_TIME_MS;

    for _turn in u16::MIN..TURN_LIMIT {
        if let engine::GameStatus::GameOver { black, white } = game.status() {
            return Outcome::Finished { black, white };
        }

        let side = game.side_to_move();
        let (player, remaining): (&mut dyn Player, &mut i64) = match side {
            engine::Side::Black => (&mut *black, &mut black_ms),
            _ => (&mut *white, &mut white_ms),
        };

        let started = Instant::now();
        let chosen = player.select_move(last_move, TimeBudget::from_ms_left(*remaining));
        charge(remaining, started);

        let mv = match chosen {
            Ok(value) => value,
            Err(err) => {
                error!(?side, %err, "player rejected the opponent's move");
                return Outcome::Forfeit(side);
            }
        };

        if *remaining < 0 {
            warn!(?side, "player exceeded the time budget");
        }

        if let Err(err) = game.play(mv) {
            error!(?side, %err, ?mv, "player made an illegal move");
            return Outcome::Forfeit(side);
        }
        last_move = mv;
    }

    let (black, white) = game.board().counts();
    Outcome::Finished { black, white }
}

/// エントリーポイント。
fn main() -> ExitCode {
    let config = match MatchConfig::from_args(std::env::args().skip(1)) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("othello_match: {err}");
            eprintln!("usage: othello_match [games] [seed] [depth] [--test-mode] [--verbose]");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.verbose);
    info!(?config, "match started");

    let mut minimax_wins = 0_u32;
    for game_index in 0..config.games {
        // 1局ごとに先後を入れ替える。
        let minimax_side = if game_index % 2 == 0 {
            engine::Side::Black
        } else {
            engine::Side::White
        };
        let seed = config.seed.wrapping_add(u64::from(game_index));

        let mut searcher = minimax::Agent::new(minimax_side)
            .with_config(Config::default().with_max_depth(config.depth));
        searcher.set_test_mode(config.test_mode);
        let mut opponent = random::Agent::new(minimax_side.opponent(), seed);

        let outcome = match minimax_side {
            engine::Side::Black => play_game(&mut searcher, &mut opponent),
            _ => play_game(&mut opponent, &mut searcher),
        };

        let won = match outcome {
            Outcome::Finished { black, white } => match minimax_side {
                engine::Side::Black => black > white,
                _ => white > black,
            },
            Outcome::Forfeit(side) => side != minimax_side,
        };
        if won {
            minimax_wins = minimax_wins.saturating_add(1);
        }

        info!(game = game_index, ?minimax_side, ?outcome, won, "game finished");
        println!("game {game_index}: {outcome:?}");
        println!("{}", searcher.board());
    }

    println!("minimax won {minimax_wins} of {} games", config.games);
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::{ArgError, MatchConfig};

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|arg| (*arg).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults_apply_without_arguments() {
        let config = MatchConfig::from_args(args(&[]));
        assert!(matches!(
            config,
            Ok(MatchConfig {
                depth: 5,
                games: 1,
                seed: 0,
                test_mode: false,
                verbose: false
            })
        ));
    }

    #[test]
    fn positional_arguments_and_flags_are_read() {
        let config = MatchConfig::from_args(args(&["3", "9", "--verbose", "2", "--test-mode"]));
        assert!(matches!(
            config,
            Ok(MatchConfig {
                depth: 2,
                games: 3,
                seed: 9,
                test_mode: true,
                verbose: true
            })
        ));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(
            MatchConfig::from_args(args(&["many"])),
            Err(ArgError::NotANumber(_))
        ));
        assert!(matches!(
            MatchConfig::from_args(args(&["1", "2", "3", "4"])),
            Err(ArgError::TooManyArguments(_))
        ));
    }
}
