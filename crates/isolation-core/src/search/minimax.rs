//! 深さ制限付き Minimax
//!
//! - 入口で締め切りを確認し、切れていれば `Timeout` を返す（上位へそのまま伝播）
//! - 深さ0ではルート手番の評価値と、指し手の代わりにルート手番の現在位置を返す
//! - 合法手は列挙順に調べ、厳密に良くなったときだけ更新する（同点は先に見た手）
//! - 合法手が無いときは、列挙した後で評価値と `Move::NONE` を返す

use log::trace;

use super::searcher::Searcher;
use super::types::{SearchOutcome, SearchResult};
use crate::eval::Evaluator;
use crate::game::GameState;
use crate::time::Deadline;

impl<E: ?Sized, D: Deadline + ?Sized> Searcher<'_, E, D> {
    /// Minimax 探索
    ///
    /// `maximizing` はこの層がルート手番の層かどうか。
    pub fn minimax<S: GameState>(&mut self, state: &S, depth: u32, maximizing: bool) -> SearchOutcome
    where
        E: Evaluator<S>,
    {
        self.check_deadline()?;
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.horizon_hits += 1;
            let score = self.evaluate(state);
            return Ok(SearchResult::new(score, state.position_of(self.root_player())));
        }

        let mut best = SearchResult::worst(maximizing);
        let moves = state.legal_moves();
        trace!("minimax depth={depth} moves={}", moves.len());

        for &mv in &moves {
            let next = state.apply_move(mv);
            let child = self.minimax(&next, depth - 1, !maximizing)?;
            let improved = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if improved {
                best = SearchResult::new(child.score, mv);
            }
        }

        if moves.is_empty() {
            best.score = self.evaluate(state);
        }

        Ok(best)
    }
}
