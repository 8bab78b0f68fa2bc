//! 探索ドライバ（固定深さ / 反復深化）
//!
//! `Timeout` を捕まえてよいのはここだけ。時間切れになった深さの途中結果は捨て、
//! 最後に完了した深さの結果を返す。
//!
//! 反復深化の状態遷移:
//!
//! ```text
//! Running(d) --完了--> Running(d+1)   （時間が残っている間）
//! Running(d) --完了--> Done           （深さ制限に一度も達しなかった = 木を読み切った）
//! Running(d) --Timeout--> Done        （深さ d の結果は破棄）
//! ```
//!
//! 深さ1は締め切りを見ずに必ず完了させるので、時間が切れていても手は必ず得られる。

use log::{debug, info};

use super::config::{SearchConfig, SearchMethod};
use super::searcher::Searcher;
use super::types::{SearchResult, Timeout};
use crate::eval::Evaluator;
use crate::game::GameState;
use crate::time::Deadline;

impl<E: ?Sized, D: Deadline + ?Sized> Searcher<'_, E, D> {
    /// 設定に従って探索する
    ///
    /// 固定深さ探索が時間切れになった場合だけ `None` を返す。
    pub fn drive<S: GameState>(&mut self, state: &S, config: &SearchConfig) -> Option<SearchResult>
    where
        E: Evaluator<S>,
    {
        debug!("method: {}", config.method);
        if config.iterative {
            self.iterative_deepening(state, config.method)
        } else {
            self.fixed_depth(state, config.method, config.search_depth)
        }
    }

    /// 固定深さで1回だけ探索する
    pub fn fixed_depth<S: GameState>(
        &mut self,
        state: &S,
        method: SearchMethod,
        depth: u32,
    ) -> Option<SearchResult>
    where
        E: Evaluator<S>,
    {
        match self.search(method, state, depth) {
            Ok(result) => {
                self.stats.depth_reached = depth;
                debug!("depth {depth}: best {} score {}", result.best_move, result.score);
                Some(result)
            }
            Err(Timeout) => {
                debug!("Timeout! (fixed depth {depth})");
                self.stats.timed_out = true;
                None
            }
        }
    }

    /// 深さ 1, 2, 3, ... と時間切れまで探索し、最後に完了した深さの結果を返す
    pub fn iterative_deepening<S: GameState>(
        &mut self,
        state: &S,
        method: SearchMethod,
    ) -> Option<SearchResult>
    where
        E: Evaluator<S>,
    {
        let mut completed = None;
        let mut depth = 1;

        loop {
            self.enforce_deadline = depth > 1;
            let horizon_before = self.stats.horizon_hits;

            match self.search(method, state, depth) {
                Ok(result) => {
                    self.stats.depth_reached = depth;
                    info!(
                        "depth {depth} completed: best {} score {} nodes {}",
                        result.best_move, result.score, self.stats.nodes
                    );
                    completed = Some(result);

                    if self.stats.horizon_hits == horizon_before {
                        debug!("game tree exhausted at depth {depth}");
                        break;
                    }
                    depth += 1;
                }
                Err(Timeout) => {
                    debug!("Timeout! (depth {depth} discarded)");
                    self.stats.timed_out = true;
                    break;
                }
            }
        }

        self.enforce_deadline = true;
        completed
    }
}
