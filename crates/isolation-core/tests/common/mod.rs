//! 統合テスト共通ヘルパー

#![allow(dead_code)]

use isolation_core::{Board, GameState};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_xoshiro::Xoshiro256PlusPlus;

/// `plies` 手ランダムに進めた盤面（途中で終局したらそこで止める）
pub fn random_board(width: usize, height: usize, plies: usize, seed: u64) -> Board {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut board = Board::new(width, height).expect("valid board size");
    for _ in 0..plies {
        let moves = board.legal_moves();
        match moves.as_slice().choose(&mut rng) {
            Some(&mv) => board = board.apply_move(mv),
            None => break,
        }
    }
    board
}

/// 先手が (1,3)、後手が隅 (6,6)。合法手は 6 対 2
pub const LOPSIDED: &str = "\
. . . . . . .
. . . 1 . . .
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . 2
";

/// 両者とも隅。合法手は 2 対 2
pub const SYMMETRIC: &str = "\
1 . . . . . .
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . 2
";
