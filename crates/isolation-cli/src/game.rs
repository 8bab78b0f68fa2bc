//! 1局の進行
//!
//! 手番側に合法手が無くなった時点でその側の負け。持ち時間を過ぎて返した手と
//! 非合法手は、その場で反則負けとする。

use std::fmt;
use std::time::Duration;

use anyhow::Result;
use isolation_core::{Board, GameState, Move, Player, TurnTimer};
use log::{info, warn};
use rand::seq::IndexedRandom;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

use crate::contestant::Contestant;

/// ゲーム設定
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// 1手の持ち時間
    pub time_limit: Duration,
    /// 対局者に渡す前にランダムに進める手数
    pub random_openings: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { time_limit: Duration::from_millis(150), random_openings: 0 }
    }
}

/// 終局理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// 手番側に合法手が無い
    NoLegalMoves,
    /// 持ち時間切れ
    Timeout,
    /// 非合法手
    IllegalMove,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EndReason::NoLegalMoves => "no legal moves",
            EndReason::Timeout => "timeout",
            EndReason::IllegalMove => "illegal move",
        })
    }
}

/// 1手ごとに呼ばれるイベント
#[derive(Debug, Clone)]
pub struct MoveEvent {
    pub ply: u32,
    pub player: Player,
    /// 指した対局者の名前（ランダム序盤なら "opening"）
    pub contestant: String,
    pub mv: Move,
    pub elapsed_ms: f64,
    /// この手で反則負けになった場合の理由
    pub forfeit: Option<EndReason>,
}

/// 対局結果
#[derive(Debug, Clone)]
pub struct GameResult {
    pub winner: Player,
    pub reason: EndReason,
    pub plies: u32,
    pub final_board: Board,
}

/// 1局を実行する
///
/// - `players[0]` が先手、`players[1]` が後手
/// - `rng`: ランダム序盤に使う
/// - `on_move`: 1手ごとに呼ばれるコールバック
pub fn run_game(
    start: Board,
    players: &mut [Box<dyn Contestant>; Player::NUM],
    config: &GameConfig,
    rng: &mut Xoshiro256PlusPlus,
    on_move: &mut dyn FnMut(&MoveEvent) -> Result<()>,
) -> Result<GameResult> {
    let mut board = start;
    let mut plies = 0u32;

    for _ in 0..config.random_openings {
        let player = board.active_player();
        let Some(&mv) = board.legal_moves().choose(rng) else {
            break;
        };
        board = board.apply_move(mv);
        plies += 1;
        on_move(&MoveEvent {
            ply: plies,
            player,
            contestant: "opening".to_string(),
            mv,
            elapsed_ms: 0.0,
            forfeit: None,
        })?;
    }

    loop {
        let player = board.active_player();
        let legal = board.legal_moves();
        if legal.is_empty() {
            info!("{player} has no legal moves");
            return Ok(GameResult {
                winner: player.opponent(),
                reason: EndReason::NoLegalMoves,
                plies,
                final_board: board,
            });
        }

        let contestant = &mut players[player.index()];
        let timer = TurnTimer::start(config.time_limit);
        let mv = contestant.select_move(&board, &legal, &timer);
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1000.0;
        plies += 1;

        let forfeit = if timer.expired() {
            warn!("{} ({player}) exceeded the time limit: {elapsed_ms:.1} ms", contestant.name());
            Some(EndReason::Timeout)
        } else {
            match board.try_apply(mv) {
                Ok(next) => {
                    board = next;
                    None
                }
                Err(err) => {
                    warn!("{} ({player}) forfeits: {err}", contestant.name());
                    Some(EndReason::IllegalMove)
                }
            }
        };

        on_move(&MoveEvent {
            ply: plies,
            player,
            contestant: contestant.name(),
            mv,
            elapsed_ms,
            forfeit,
        })?;

        if let Some(reason) = forfeit {
            return Ok(GameResult { winner: player.opponent(), reason, plies, final_board: board });
        }
        info!("ply {plies}: {player} -> {mv}\n{board}");
    }
}
