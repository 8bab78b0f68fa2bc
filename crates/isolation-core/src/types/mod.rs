//! 基本型
//!
//! - `Player`: 手番（先手/後手）
//! - `Position`: 盤上の座標（未配置・指し手なしの番兵を含む）
//! - `Move`: 移動先の座標（`Position` と同じ表現）
//! - `MoveList`: 合法手リスト

mod player;
mod position;

pub use player::Player;
pub use position::{Move, MoveList, ParsePositionError, Position};
