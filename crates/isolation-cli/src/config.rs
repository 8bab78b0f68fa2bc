//! 対局設定（TOML ファイル + コマンドライン上書き）
//!
//! ```toml
//! [first]
//! player = "agent"
//! method = "alphabeta"
//! search_depth = 4
//!
//! [second]
//! player = "random"
//! ```
//!
//! 優先順位は 既定値 < TOML < コマンドライン。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use isolation_core::{SearchConfig, SearchMethod};
use serde::Deserialize;

/// プレイヤーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// 探索エージェント
    Agent,
    /// 合法手から一様ランダム
    Random,
}

/// 片側の設定（TOML の `[first]` / `[second]`）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SideConfig {
    pub player: Option<PlayerKind>,
    pub method: Option<SearchMethod>,
    pub search_depth: Option<u32>,
    pub iterative: Option<bool>,
    pub timer_threshold_ms: Option<f64>,
}

impl SideConfig {
    /// `other` で指定された項目だけ上書きする
    pub fn merged(&self, other: &SideConfig) -> SideConfig {
        SideConfig {
            player: other.player.or(self.player),
            method: other.method.or(self.method),
            search_depth: other.search_depth.or(self.search_depth),
            iterative: other.iterative.or(self.iterative),
            timer_threshold_ms: other.timer_threshold_ms.or(self.timer_threshold_ms),
        }
    }

    /// 探索設定を組み立てる（未指定の項目は既定値）
    pub fn search_config(&self) -> Result<SearchConfig> {
        let mut builder = SearchConfig::builder();
        if let Some(method) = self.method {
            builder = builder.method(method);
        }
        if let Some(depth) = self.search_depth {
            builder = builder.search_depth(depth);
        }
        if let Some(iterative) = self.iterative {
            builder = builder.iterative(iterative);
        }
        if let Some(threshold) = self.timer_threshold_ms {
            builder = builder.timer_threshold_ms(threshold);
        }
        Ok(builder.build()?)
    }
}

/// 対局設定ファイル
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchFile {
    pub first: SideConfig,
    pub second: SideConfig,
}

impl MatchFile {
    pub fn parse(text: &str) -> Result<MatchFile> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<MatchFile> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }
}
