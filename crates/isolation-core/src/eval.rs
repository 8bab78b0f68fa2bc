//! 評価関数
//!
//! 探索の末端（深さ0）と合法手の無い局面で呼ばれる。評価は常に探索の
//! ルート手番側（`player`）から見た値を返す。

use crate::game::GameState;
use crate::types::Player;

/// 勝ち局面の評価値
pub const WIN_SCORE: f64 = 1.0;

/// 負け局面の評価値
pub const LOSS_SCORE: f64 = -1.0;

/// 局面評価
///
/// Contract:
/// - 副作用を持たない純粋関数であること
/// - 到達可能なすべての局面で値を返すこと
pub trait Evaluator<S: GameState> {
    /// `player` から見た `state` の評価値
    fn evaluate(&self, state: &S, player: Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, Player) -> f64,
{
    #[inline]
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        self(state, player)
    }
}

/// 既定の評価関数（mobility）
///
/// 勝ちなら `WIN_SCORE`、負けなら `LOSS_SCORE`、それ以外は `player` の合法手の数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobilityEvaluator;

impl<S: GameState> Evaluator<S> for MobilityEvaluator {
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        if state.is_winner(player) {
            return WIN_SCORE;
        }
        if state.is_loser(player) {
            return LOSS_SCORE;
        }
        state.legal_moves_for(player).len() as f64
    }
}
