//! 棋譜の JSONL 出力
//!
//! 1行1イベント。対局ごとに `game_start`、手ごとに `move`、最後に `game_end` を書く。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use isolation_core::{Move, Player};
use serde::Serialize;

use crate::game::{EndReason, GameResult, MoveEvent};

/// 1行分のレコード
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Record<'a> {
    GameStart {
        game: u32,
        started_at: String,
        first: &'a str,
        second: &'a str,
        width: usize,
        height: usize,
    },
    Move {
        game: u32,
        ply: u32,
        player: Player,
        contestant: &'a str,
        #[serde(rename = "move")]
        mv: Move,
        elapsed_ms: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        forfeit: Option<EndReason>,
    },
    GameEnd {
        game: u32,
        winner: Player,
        reason: EndReason,
        plies: u32,
    },
}

impl<'a> Record<'a> {
    pub fn from_move(game: u32, event: &'a MoveEvent) -> Self {
        Record::Move {
            game,
            ply: event.ply,
            player: event.player,
            contestant: &event.contestant,
            mv: event.mv,
            elapsed_ms: event.elapsed_ms,
            forfeit: event.forfeit,
        }
    }

    pub fn from_result(game: u32, result: &GameResult) -> Self {
        Record::GameEnd { game, winner: result.winner, reason: result.reason, plies: result.plies }
    }
}

/// JSONL 書き出し先（パス未指定なら何もしない）
pub struct Recorder {
    writer: Option<BufWriter<File>>,
}

impl Recorder {
    pub fn create(path: Option<&Path>) -> Result<Self> {
        let writer = match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create record file {}", path.display()))?;
                Some(BufWriter::new(file))
            }
            None => None,
        };
        Ok(Self { writer })
    }

    pub fn write(&mut self, record: &Record<'_>) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            serde_json::to_writer(&mut *writer, record)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}
