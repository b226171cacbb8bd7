//! Reversi (Othello) の固定深さミニマックス・プレイヤー。
//!
//! このクレートは盤面と進行を管理する `engine` と、手を選択する `ai` を提供します。
//! 対局ドライバ（`othello_match`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面・ゲーム進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
