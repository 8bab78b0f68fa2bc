//! 探索が局面に要求する能力
//!
//! 探索エンジンは局面を書き換えない。`apply_move` は新しい値を返し、
//! 元の局面とは独立していなければならない（片方を変更しても他方に影響しない）。

use crate::types::{Move, MoveList, Player, Position};

/// 二人・完全情報・交互手番ゲームの局面
///
/// 合法手の列挙順は探索の同点処理（先に見つかった手を採用）に直結するため、
/// 同じ局面に対しては常に同じ順序を返すこと。
pub trait GameState: Clone {
    /// 手番のプレイヤー
    fn active_player(&self) -> Player;

    /// 指定プレイヤーの合法手
    fn legal_moves_for(&self, player: Player) -> MoveList;

    /// 手番側の合法手
    #[inline]
    fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.active_player())
    }

    /// `mv` を指した後の局面を返す（`self` は変更しない）
    ///
    /// `mv` は `legal_moves()` が返した手に限る。未検証の手は `Board::try_apply` を使う。
    fn apply_move(&self, mv: Move) -> Self;

    /// `player` が勝っているか
    fn is_winner(&self, player: Player) -> bool;

    /// `player` が負けているか
    fn is_loser(&self, player: Player) -> bool;

    /// `player` の現在位置（未配置なら `Position::NOT_MOVED`）
    fn position_of(&self, player: Player) -> Position;
}
