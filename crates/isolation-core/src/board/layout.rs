//! 盤面のテキスト表現
//!
//! ```text
//! . . # . . . .
//! . 1 . . . . .
//! . . . . 2 . .
//! ```
//!
//! `.` 空き、`#` 塞がったマス、`1` / `2` 各プレイヤーの位置。空白は無視する。

use std::fmt;

use super::{Board, BoardError, MAX_SIZE};
use crate::types::{Player, Position};

impl Board {
    /// テキストから盤面を組み立てる
    ///
    /// プレイヤー記号が無い側は未配置として扱う。経過手数は塞がったマスの数になる。
    pub fn from_layout(text: &str, active: Player) -> Result<Board, BoardError> {
        let rows: Vec<(usize, Vec<char>)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let cells = line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<char>>();
                (i + 1, cells)
            })
            .filter(|(_, cells)| !cells.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map(|(_, cells)| cells.len()).unwrap_or(0);
        if height == 0 || height > MAX_SIZE as usize || width == 0 || width > MAX_SIZE as usize {
            return Err(BoardError::InvalidSize { width, height });
        }

        let mut occupied = 0u64;
        let mut locations = [Position::NOT_MOVED; Player::NUM];
        for (row, (line, cells)) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::Layout {
                    line: *line,
                    message: format!("expected {width} cells, got {}", cells.len()),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                let pos = Position::new(row as i8, col as i8);
                let player = match c {
                    '.' => continue,
                    '#' => None,
                    '1' => Some(Player::First),
                    '2' => Some(Player::Second),
                    other => {
                        return Err(BoardError::Layout {
                            line: *line,
                            message: format!("unexpected character '{other}'"),
                        });
                    }
                };
                if let Some(p) = player {
                    if locations[p.index()] != Position::NOT_MOVED {
                        return Err(BoardError::Layout {
                            line: *line,
                            message: format!("player {} appears twice", p.symbol()),
                        });
                    }
                    locations[p.index()] = pos;
                }
                occupied |= 1u64 << (row * width + col);
            }
        }

        Ok(Board::from_parts(width as u8, height as u8, occupied, locations, active))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                let pos = Position::new(row, col);
                let c = if self.locations[Player::First.index()] == pos {
                    Player::First.symbol()
                } else if self.locations[Player::Second.index()] == pos {
                    Player::Second.symbol()
                } else if self.is_empty(pos) {
                    '.'
                } else {
                    '#'
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
