//! 手の選択（エージェント）
//!
//! 1. 合法手が無ければ `Move::NONE`
//! 2. 自分がまだ盤上にいなければ序盤定跡の手（探索しない）
//! 3. それ以外は設定に従って固定深さ探索または反復深化

use log::{debug, warn};

use crate::eval::{Evaluator, MobilityEvaluator};
use crate::game::GameState;
use crate::search::{ConfigError, SearchConfig, SearchStats, Searcher};
use crate::time::Deadline;
use crate::types::{Move, Position};

/// 既定の初手（7×7 盤の中央）
pub const OPENING_MOVE: Move = Position::new(3, 3);

/// 序盤定跡
///
/// 登録順に見て最初に合法な手を返す。どれも合法でなければ最初の合法手。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningBook {
    moves: Vec<Move>,
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self { moves: vec![OPENING_MOVE] }
    }
}

impl OpeningBook {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// 定跡手を引く（`legal_moves` は空でないこと）
    pub fn lookup(&self, legal_moves: &[Move]) -> Move {
        self.moves
            .iter()
            .copied()
            .find(|mv| legal_moves.contains(mv))
            .or_else(|| legal_moves.first().copied())
            .unwrap_or(Move::NONE)
    }
}

/// 探索エージェント
pub struct Agent<E = MobilityEvaluator> {
    config: SearchConfig,
    evaluator: E,
    book: OpeningBook,
    last_stats: SearchStats,
}

impl Agent<MobilityEvaluator> {
    /// 既定の評価関数（mobility）で作る
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::with_evaluator(config, MobilityEvaluator)
    }
}

impl<E> Agent<E> {
    /// 評価関数を指定して作る。設定が不正ならその場でエラー
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            evaluator,
            book: OpeningBook::default(),
            last_stats: SearchStats::default(),
        })
    }

    /// 序盤定跡を差し替える
    pub fn with_opening_book(mut self, book: OpeningBook) -> Self {
        self.book = book;
        self
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 直前の `select_move` の探索統計
    #[inline]
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// 締め切りまでに手を選ぶ
    ///
    /// 返す手は `legal_moves` のいずれか。`legal_moves` が空なら `Move::NONE`。
    pub fn select_move<S, D>(&mut self, state: &S, legal_moves: &[Move], deadline: &D) -> Move
    where
        S: GameState,
        E: Evaluator<S>,
        D: Deadline + ?Sized,
    {
        self.last_stats = SearchStats::default();

        if legal_moves.is_empty() {
            debug!("no legal moves");
            return Move::NONE;
        }

        let me = state.active_player();
        if state.position_of(me) == Position::NOT_MOVED {
            let mv = self.book.lookup(legal_moves);
            debug!("First move: {mv}");
            return mv;
        }

        let mut searcher =
            Searcher::new(me, &self.evaluator, deadline, self.config.timer_threshold_ms);
        let result = searcher.drive(state, &self.config);
        self.last_stats = searcher.into_stats();

        match result {
            Some(result) if legal_moves.contains(&result.best_move) => result.best_move,
            Some(result) => {
                warn!("search returned {} which is not in the legal move list", result.best_move);
                legal_moves[0]
            }
            None => {
                warn!("search timed out before any depth completed; playing first legal move");
                legal_moves[0]
            }
        }
    }
}
