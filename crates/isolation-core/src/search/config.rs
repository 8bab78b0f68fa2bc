//! 探索設定
//!
//! 既定値は `search_depth = 3`、`iterative = true`、`method = minimax`、
//! `timer_threshold_ms = 10.0`。TOML などから部分的に読み込んだ場合も残りは既定値で埋まる。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 設定エラー
///
/// 実行時の状況ではなく設定ミスを表すので、再試行せずに即座に報告する。
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown search method '{0}' (expected 'minimax' or 'alphabeta')")]
    UnknownMethod(String),

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u32),

    #[error("timer threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
}

/// 探索アルゴリズム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SearchMethod {
    #[default]
    Minimax,
    AlphaBeta,
}

impl SearchMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            SearchMethod::Minimax => "minimax",
            SearchMethod::AlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchMethod::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(SearchMethod::AlphaBeta),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for SearchMethod {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SearchMethod> for String {
    fn from(method: SearchMethod) -> Self {
        method.as_str().to_string()
    }
}

/// 探索設定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 固定深さ探索の深さ（1以上）
    pub search_depth: u32,
    /// 反復深化を行うか
    pub iterative: bool,
    /// 探索アルゴリズム
    pub method: SearchMethod,
    /// 残り時間がこれを下回ったら探索を打ち切る（ミリ秒）
    pub timer_threshold_ms: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            iterative: true,
            method: SearchMethod::Minimax,
            timer_threshold_ms: 10.0,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    /// 値の範囲を検証する
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::InvalidDepth(self.search_depth));
        }
        if !self.timer_threshold_ms.is_finite() || self.timer_threshold_ms < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.timer_threshold_ms));
        }
        Ok(())
    }
}

/// 検証付きの SearchConfig ビルダー
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_depth(mut self, depth: u32) -> Self {
        self.config.search_depth = depth;
        self
    }

    pub fn iterative(mut self, iterative: bool) -> Self {
        self.config.iterative = iterative;
        self
    }

    pub fn method(mut self, method: SearchMethod) -> Self {
        self.config.method = method;
        self
    }

    pub fn timer_threshold_ms(mut self, threshold_ms: f64) -> Self {
        self.config.timer_threshold_ms = threshold_ms;
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
