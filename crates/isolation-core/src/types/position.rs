//! 座標（Position）と指し手（Move）
//!
//! 指し手は「移動先のマス」なので、座標と同じ表現を使う。
//! 盤外の値を2つ番兵として予約している。
//!
//! - `Position::NOT_MOVED`: まだ盤上に置かれていないプレイヤーの位置
//! - `Move::NONE`: 合法手が無いことを表す `(-1, -1)`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 盤上の座標 (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

/// 指し手（移動先のマス）
pub type Move = Position;

/// 合法手リスト
///
/// 配置後の合法手はナイト移動の最大8手なのでインラインに収まる。
/// 初手（配置）のときだけヒープに溢れる。
pub type MoveList = SmallVec<[Move; 8]>;

impl Position {
    /// 未配置
    pub const NOT_MOVED: Position = Position { row: i8::MIN, col: i8::MIN };

    /// 指し手なし
    pub const NONE: Move = Position { row: -1, col: -1 };

    /// 座標から生成
    #[inline]
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    /// 番兵ではない実在の座標かどうか
    #[inline]
    pub const fn is_placed(self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// 指し手なしの番兵かどうか
    #[inline]
    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    /// (dr, dc) だけずらした座標
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Position {
        Position { row: self.row + dr, col: self.col + dc }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Position::NOT_MOVED {
            f.write_str("-")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// 座標文字列のパースエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid position '{0}' (expected 'row,col')")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    /// `"3,4"` / `"(3, 4)"` / `"-"`（未配置）を受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "-" {
            return Ok(Position::NOT_MOVED);
        }
        let inner = trimmed.trim_start_matches('(').trim_end_matches(')');
        let err = || ParsePositionError(s.to_string());
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse::<i8>().map_err(|_| err())?;
        let col = col.trim().parse::<i8>().map_err(|_| err())?;
        Ok(Position::new(row, col))
    }
}
