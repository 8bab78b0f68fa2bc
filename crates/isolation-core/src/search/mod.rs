//! 探索モジュール
//!
//! - `minimax`: 深さ制限付き Minimax
//! - `alpha_beta`: Alpha-Beta 枝刈り（Minimax と同じ値を返す）
//! - `driver`: 固定深さ / 反復深化と時間切れ処理
//! - `config`: 探索設定
//!
//! 時間切れは例外ではなく `Result<SearchResult, Timeout>` で表し、各再帰呼び出しが
//! `?` でそのまま上へ返す。

mod alpha_beta;
mod config;
mod driver;
mod minimax;
mod searcher;
mod types;

#[cfg(test)]
mod test_helpers;

pub use config::{ConfigError, SearchConfig, SearchConfigBuilder, SearchMethod};
pub use searcher::Searcher;
pub use types::{SearchOutcome, SearchResult, SearchStats, Timeout};
