//! # isolation-core
//!
//! 締め切り付きの二人零和ゲーム探索エージェント。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Player, Position, Move, MoveList）
//! - `game`: 探索が局面に要求する能力（`GameState` トレイト）
//! - `board`: Isolation（ナイト移動で塞ぎ合うゲーム）の参照実装
//! - `eval`: 評価関数（`Evaluator` トレイトと既定の mobility 評価）
//! - `time`: 残り時間の問い合わせ（`Deadline`）
//! - `search`: Minimax / Alpha-Beta / 反復深化
//! - `agent`: 手の選択（序盤定跡 + 探索の呼び出し）

// 基本型
pub mod types;

// 局面
pub mod board;
pub mod game;

// 評価
pub mod eval;

// 時間
pub mod time;

// 探索
pub mod search;

// エージェント
pub mod agent;

pub use agent::{Agent, OpeningBook};
pub use board::{Board, BoardError};
pub use eval::{Evaluator, MobilityEvaluator};
pub use game::GameState;
pub use search::{
    ConfigError, SearchConfig, SearchConfigBuilder, SearchMethod, SearchOutcome, SearchResult,
    SearchStats, Searcher, Timeout,
};
pub use time::{Deadline, FixedClock, ManualClock, TurnTimer};
pub use types::{Move, MoveList, Player, Position};
