//! Isolation の対局ランナー
//!
//! - `config`: TOML 設定とコマンドライン上書き
//! - `contestant`: 対局者（探索エージェント / ランダム）
//! - `game`: 1局の進行と反則判定
//! - `record`: JSONL 棋譜

pub mod config;
pub mod contestant;
pub mod game;
pub mod record;
