//! 探索の結果型

use crate::types::Move;

/// 探索の時間切れ
///
/// データの誤りではなく「今すぐ止めて、この深さの途中結果は捨てる」という制御信号。
/// 再帰の途中では捕まえずに `?` でそのまま上へ返す。捕まえてよいのは反復深化の
/// ドライバだけ。
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search timed out")]
pub struct Timeout;

/// 1ノードぶんの探索結果（評価値と最善手）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// ルート手番側から見た評価値
    pub score: f64,
    /// 最善手（深さ0では手番側の現在位置、合法手が無ければ `Move::NONE`）
    pub best_move: Move,
}

impl SearchResult {
    #[inline]
    pub const fn new(score: f64, best_move: Move) -> Self {
        Self { score, best_move }
    }

    /// 探索開始時の最悪値（max 層は -∞、min 層は +∞）
    #[inline]
    pub(crate) const fn worst(maximizing: bool) -> Self {
        let score = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        Self { score, best_move: Move::NONE }
    }
}

/// 再帰呼び出しの戻り値
pub type SearchOutcome = Result<SearchResult, Timeout>;

/// 探索統計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 時間チェックを通過したノード数
    pub nodes: u64,
    /// 評価関数を呼んだ回数
    pub leaves: u64,
    /// 深さ制限で打ち切った末端の数
    pub horizon_hits: u64,
    /// alpha / beta カット数
    pub cutoffs: u64,
    /// 最後に完了した深さ（0 = 未完了）
    pub depth_reached: u32,
    /// 時間切れで打ち切ったか
    pub timed_out: bool,
}
