//! Isolation 盤面
//!
//! 各プレイヤーは1つの駒を持ち、交互にナイト移動する。一度駒が乗ったマスは
//! 塞がれて二度と使えない。手番で動けなくなった側が負け。
//!
//! - 盤面は最大 8×8 で、塞がったマスを `u64` のビットボードで持つ
//! - `Board` は `Copy` なので、`apply_move` で得た局面は元の局面と完全に独立している
//! - 初手（未配置）は空きマスのどこにでも置ける

mod layout;

use crate::game::GameState;
use crate::types::{Move, MoveList, Player, Position};

/// 標準の盤面サイズ
pub const DEFAULT_SIZE: u8 = 7;

/// 盤面の最大辺長（`u64` に収まる範囲）
pub const MAX_SIZE: u8 = 8;

/// ナイト移動の方向（列挙順は合法手の順序になる）
const KNIGHT_DIRECTIONS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

/// 盤面関連のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board size {width}x{height} (each side must be 1..={max})", max = MAX_SIZE)]
    InvalidSize { width: usize, height: usize },

    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("illegal move {mv} for {player}")]
    IllegalMove { mv: Move, player: Player },

    #[error("invalid layout at line {line}: {message}")]
    Layout { line: usize, message: String },
}

/// Isolation の局面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// 塞がったマス（bit = row * width + col）
    occupied: u64,
    /// 各プレイヤーの位置
    locations: [Position; Player::NUM],
    /// 手番
    active: Player,
    /// 経過手数
    ply: u32,
}

impl Board {
    /// 空の盤面を作る
    pub fn new(width: usize, height: usize) -> Result<Board, BoardError> {
        let valid = |n: usize| (1..=MAX_SIZE as usize).contains(&n);
        if !valid(width) || !valid(height) {
            return Err(BoardError::InvalidSize { width, height });
        }
        Ok(Board {
            width: width as u8,
            height: height as u8,
            occupied: 0,
            locations: [Position::NOT_MOVED; Player::NUM],
            active: Player::First,
            ply: 0,
        })
    }

    /// 7×7 の初期局面
    pub fn standard() -> Board {
        Board {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            occupied: 0,
            locations: [Position::NOT_MOVED; Player::NUM],
            active: Player::First,
            ply: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// 経過手数
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// 盤内かどうか
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_placed() && (pos.row as u8) < self.height && (pos.col as u8) < self.width
    }

    #[inline]
    fn bit(&self, pos: Position) -> u64 {
        1u64 << (pos.row as u32 * self.width as u32 + pos.col as u32)
    }

    /// 空きマスかどうか（盤外は false）
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.contains(pos) && self.occupied & self.bit(pos) == 0
    }

    /// 塞がったマスの数
    #[inline]
    pub fn occupied_count(&self) -> u32 {
        self.occupied.count_ones()
    }

    /// 空きマスを行優先で列挙する
    pub fn empty_cells(&self) -> MoveList {
        let mut cells = MoveList::new();
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                let pos = Position::new(row, col);
                if self.is_empty(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// 合法手かどうか（手番側）
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// 合法性を確認してから指す
    pub fn try_apply(&self, mv: Move) -> Result<Board, BoardError> {
        if !self.contains(mv) {
            return Err(BoardError::OutOfBounds(mv));
        }
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMove { mv, player: self.active });
        }
        Ok(self.apply_move(mv))
    }

    /// 手番側が動けなければ終局
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// 終局していれば勝者
    pub fn winner(&self) -> Option<Player> {
        self.is_game_over().then(|| self.active.opponent())
    }

    /// 盤面を直接組み立てる（layout パーサ用）
    fn from_parts(
        width: u8,
        height: u8,
        occupied: u64,
        locations: [Position; Player::NUM],
        active: Player,
    ) -> Board {
        Board { width, height, occupied, locations, active, ply: occupied.count_ones() }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl GameState for Board {
    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, player: Player) -> MoveList {
        let from = self.locations[player.index()];
        if from == Position::NOT_MOVED {
            return self.empty_cells();
        }
        KNIGHT_DIRECTIONS
            .iter()
            .map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.is_empty(to))
            .collect()
    }

    fn apply_move(&self, mv: Move) -> Board {
        debug_assert!(self.is_empty(mv), "apply_move to non-empty cell {mv}");
        let mut next = *self;
        next.occupied |= self.bit(mv);
        next.locations[self.active.index()] = mv;
        next.active = self.active.opponent();
        next.ply += 1;
        next
    }

    #[inline]
    fn is_winner(&self, player: Player) -> bool {
        player != self.active && self.legal_moves().is_empty()
    }

    #[inline]
    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves().is_empty()
    }

    #[inline]
    fn position_of(&self, player: Player) -> Position {
        self.locations[player.index()]
    }
}
