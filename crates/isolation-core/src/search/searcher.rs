//! 探索器
//!
//! 1回の手選択ごとに作られ、ルート手番・評価関数・締め切り・統計を保持する。
//! 再帰は単一スレッドの深さ優先で、各枝は `apply_move` で得た自分専用の局面を持つ。

use log::trace;

use super::config::SearchMethod;
use super::types::{SearchOutcome, SearchStats, Timeout};
use crate::eval::Evaluator;
use crate::game::GameState;
use crate::time::Deadline;
use crate::types::Player;

/// Minimax / Alpha-Beta 探索器
pub struct Searcher<'a, E: ?Sized, D: ?Sized> {
    /// 評価の視点となるルート手番
    root: Player,
    evaluator: &'a E,
    deadline: &'a D,
    /// 残り時間がこれを下回ったら `Timeout`
    threshold_ms: f64,
    /// false の間は締め切りを見ない（反復深化の深さ1専用）
    pub(super) enforce_deadline: bool,
    pub(super) stats: SearchStats,
}

impl<'a, E: ?Sized, D: Deadline + ?Sized> Searcher<'a, E, D> {
    pub fn new(root: Player, evaluator: &'a E, deadline: &'a D, threshold_ms: f64) -> Self {
        Self {
            root,
            evaluator,
            deadline,
            threshold_ms,
            enforce_deadline: true,
            stats: SearchStats::default(),
        }
    }

    /// ルート手番
    #[inline]
    pub fn root_player(&self) -> Player {
        self.root
    }

    /// これまでの統計
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// 再帰の入口で呼ぶ。残り時間がしきい値未満なら `Timeout`
    #[inline]
    pub(super) fn check_deadline(&self) -> Result<(), Timeout> {
        if self.enforce_deadline && self.deadline.remaining_ms() < self.threshold_ms {
            trace!("deadline below threshold ({} ms)", self.threshold_ms);
            return Err(Timeout);
        }
        Ok(())
    }

    /// ルート手番から見た静的評価
    #[inline]
    pub(super) fn evaluate<S: GameState>(&mut self, state: &S) -> f64
    where
        E: Evaluator<S>,
    {
        self.stats.leaves += 1;
        self.evaluator.evaluate(state, self.root)
    }

    /// 指定アルゴリズムで `depth` 手先まで探索する
    pub fn search<S: GameState>(
        &mut self,
        method: SearchMethod,
        state: &S,
        depth: u32,
    ) -> SearchOutcome
    where
        E: Evaluator<S>,
    {
        match method {
            SearchMethod::Minimax => self.minimax(state, depth, true),
            SearchMethod::AlphaBeta => {
                self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }
}
