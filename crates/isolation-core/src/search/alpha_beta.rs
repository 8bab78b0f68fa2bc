//! Alpha-Beta 探索
//!
//! Minimax と同じ値を返し、調べるノード数だけを減らす。
//!
//! Minimax との違い:
//! - 合法手が無いことは手の列挙直後、ループに入る前に判定して即座に返す
//! - max 層で `best >= beta`、min 層で `best <= alpha` になった時点で残りの手を調べずに返す

use log::trace;

use super::searcher::Searcher;
use super::types::{SearchOutcome, SearchResult};
use crate::eval::Evaluator;
use crate::game::GameState;
use crate::time::Deadline;
use crate::types::Move;

impl<E: ?Sized, D: Deadline + ?Sized> Searcher<'_, E, D> {
    /// Alpha-Beta 探索
    ///
    /// ルートからは `alpha = -∞`、`beta = +∞` で呼ぶ。
    pub fn alphabeta<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchOutcome
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

        let moves = state.legal_moves();
        if moves.is_empty() {
            let score = self.evaluate(state);
            return Ok(SearchResult::new(score, Move::NONE));
        }
        trace!("alphabeta depth={depth} alpha={alpha} beta={beta} moves={}", moves.len());

        let mut best = SearchResult::worst(maximizing);
        for &mv in &moves {
            let next = state.apply_move(mv);
            let child = self.alphabeta(&next, depth - 1, alpha, beta, !maximizing)?;

            if maximizing {
                if child.score > best.score {
                    best = SearchResult::new(child.score, mv);
                }
                if best.score >= beta {
                    self.stats.cutoffs += 1;
                    return Ok(best);
                }
                alpha = alpha.max(best.score);
            } else {
                if child.score < best.score {
                    best = SearchResult::new(child.score, mv);
                }
                if best.score <= alpha {
                    self.stats.cutoffs += 1;
                    return Ok(best);
                }
                beta = beta.min(best.score);
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{GameTree, leaf_value};
    use super::*;
    use crate::search::Timeout;
    use crate::time::{FixedClock, ManualClock};
    use crate::types::Player;

    fn root_search(tree: &GameTree, depth: u32, maximizing: bool) -> (SearchResult, u64, u64) {
        let mut searcher = Searcher::new(Player::First, &leaf_value, &FixedClock::INFINITE, 10.0);
        let result = searcher
            .alphabeta(&tree.root(), depth, f64::NEG_INFINITY, f64::INFINITY, maximizing)
            .unwrap();
        (result, searcher.stats().horizon_hits, searcher.stats().cutoffs)
    }

    #[test]
    fn test_alphabeta_textbook_tree() {
        // 2枝目は最初の葉 2 <= alpha(3) で、3枝目は 14, 5 の後の 2 でカットされる
        let tree = GameTree::from_leaves(&[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]]);
        let (result, leaves, cutoffs) = root_search(&tree, 2, true);
        assert_eq!(result.score, 3.0);
        assert_eq!(result.best_move, GameTree::child_move(0));
        assert_eq!(leaves, 7);
        assert_eq!(cutoffs, 2);
    }

    #[test]
    fn test_alphabeta_beta_cutoff_on_min_root() {
        // min 層ルート: 1枝目 max(1, 2) = 2 で beta = 2。2枝目の最初の葉 5 >= 2 でカット
        let tree = GameTree::from_leaves(&[&[1.0, 2.0], &[5.0, 0.0, 0.0]]);
        let (result, leaves, cutoffs) = root_search(&tree, 2, false);
        assert_eq!(result.score, 2.0);
        assert_eq!(result.best_move, GameTree::child_move(0));
        assert_eq!(leaves, 3);
        assert_eq!(cutoffs, 1);
    }

    #[test]
    fn test_alphabeta_tie_keeps_first_move() {
        let tree = GameTree::from_leaves(&[&[4.0, 9.0], &[4.0, 7.0], &[4.0]]);
        let (result, _, _) = root_search(&tree, 2, true);
        assert_eq!(result.score, 4.0);
        assert_eq!(result.best_move, GameTree::child_move(0));
    }

    #[test]
    fn test_alphabeta_no_moves_checked_before_loop() {
        let tree = GameTree::from_leaves(&[]);
        let (result, leaves, _) = root_search(&tree, 4, true);
        assert_eq!(result.best_move, Move::NONE);
        assert_eq!(result.score, tree.value(0));
        assert_eq!(leaves, 0);
    }

    #[test]
    fn test_alphabeta_terminal_child_evaluated() {
        // 2枝目は子を持たない終局ノード（評価値 7.0）
        let mut tree = GameTree::new();
        let a = tree.add_node(0, 0.0);
        tree.add_node(a, 1.0);
        tree.add_node(0, 7.0);
        let (result, _, _) = root_search(&tree, 2, true);
        assert_eq!(result.score, 7.0);
        assert_eq!(result.best_move, GameTree::child_move(1));
    }

    #[test]
    fn test_alphabeta_timeout_propagates() {
        let tree = GameTree::from_leaves(&[&[3.0, 12.0], &[2.0, 4.0]]);
        let clock = ManualClock::new(100.0, 20.0);
        let mut searcher = Searcher::new(Player::First, &leaf_value, &clock, 50.0);
        let outcome =
            searcher.alphabeta(&tree.root(), 2, f64::NEG_INFINITY, f64::INFINITY, true);
        assert_eq!(outcome, Err(Timeout));
        assert_eq!(clock.polls(), 4);
    }
}
