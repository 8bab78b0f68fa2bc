//! 対局者
//!
//! `run_game` は対局者を `Contestant` トレイト越しに呼ぶ。探索エージェントと
//! ランダムプレイヤーを用意している。

use isolation_core::{Agent, Board, Move, SearchConfig, TurnTimer};
use log::debug;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::{PlayerKind, SideConfig};

/// 1手ずつ指す対局者
pub trait Contestant {
    /// ログや集計に使う名前
    fn name(&self) -> String;

    /// `legal_moves` が空でない局面で手を返す。`timer` を過ぎたら負け
    fn select_move(&mut self, board: &Board, legal_moves: &[Move], timer: &TurnTimer) -> Move;
}

/// 探索エージェント
pub struct SearchPlayer {
    agent: Agent,
}

impl SearchPlayer {
    pub fn new(agent: Agent) -> Self {
        Self { agent }
    }
}

impl Contestant for SearchPlayer {
    fn name(&self) -> String {
        let config = self.agent.config();
        if config.iterative {
            format!("agent({}, iterative)", config.method)
        } else {
            format!("agent({}, depth {})", config.method, config.search_depth)
        }
    }

    fn select_move(&mut self, board: &Board, legal_moves: &[Move], timer: &TurnTimer) -> Move {
        let mv = self.agent.select_move(board, legal_moves, timer);
        let stats = self.agent.last_stats();
        debug!(
            "{}: {mv} (depth {} nodes {} cutoffs {} timed_out {})",
            self.name(),
            stats.depth_reached,
            stats.nodes,
            stats.cutoffs,
            stats.timed_out
        );
        mv
    }
}

/// 合法手から一様に選ぶ
pub struct RandomPlayer {
    rng: Xoshiro256PlusPlus,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self { rng: Xoshiro256PlusPlus::seed_from_u64(seed) }
    }
}

impl Contestant for RandomPlayer {
    fn name(&self) -> String {
        "random".to_string()
    }

    fn select_move(&mut self, _board: &Board, legal_moves: &[Move], _timer: &TurnTimer) -> Move {
        legal_moves.choose(&mut self.rng).copied().unwrap_or(Move::NONE)
    }
}

/// 設定から対局者を作る
pub fn build_contestant(side: &SideConfig, seed: u64) -> anyhow::Result<Box<dyn Contestant>> {
    match side.player.unwrap_or(PlayerKind::Agent) {
        PlayerKind::Agent => {
            let config: SearchConfig = side.search_config()?;
            Ok(Box::new(SearchPlayer::new(Agent::new(config)?)))
        }
        PlayerKind::Random => Ok(Box::new(RandomPlayer::new(seed))),
    }
}
