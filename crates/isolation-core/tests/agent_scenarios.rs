//! エージェント（手選択）のシナリオテスト

mod common;

use std::time::Duration;

use isolation_core::agent::OPENING_MOVE;
use isolation_core::{
    Agent, Board, Deadline, FixedClock, GameState, ManualClock, Move, MobilityEvaluator, Player,
    SearchConfig, SearchMethod, Searcher, TurnTimer,
};

fn agent(method: SearchMethod, iterative: bool, depth: u32) -> Agent {
    let config = SearchConfig::builder()
        .method(method)
        .iterative(iterative)
        .search_depth(depth)
        .build()
        .unwrap();
    Agent::new(config).unwrap()
}

#[test]
fn test_empty_legal_moves_returns_sentinel() {
    let board = common::random_board(7, 7, 6, 3);
    for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
        let mut agent = agent(method, true, 3);
        assert_eq!(agent.select_move(&board, &[], &FixedClock::INFINITE), Move::new(-1, -1));
    }
}

#[test]
fn test_unplaced_player_plays_opening_regardless_of_deadline() {
    let board = Board::standard();
    let legal = board.legal_moves();
    for clock in [FixedClock::INFINITE, FixedClock::EXPIRED, FixedClock(-50.0)] {
        let mut agent = agent(SearchMethod::AlphaBeta, true, 3);
        assert_eq!(agent.select_move(&board, &legal, &clock), Move::new(3, 3));
        assert_eq!(agent.last_stats().nodes, 0);
    }
    assert_eq!(OPENING_MOVE, Move::new(3, 3));
}

#[test]
fn test_expired_deadline_iterative_returns_legal_move() {
    for seed in 0..20 {
        let board = common::random_board(7, 7, 2 + (seed as usize % 10), seed);
        let legal = board.legal_moves();
        if legal.is_empty() {
            continue;
        }
        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let mut agent = agent(method, true, 3);
            let mv = agent.select_move(&board, &legal, &FixedClock::EXPIRED);
            assert!(legal.contains(&mv), "seed {seed} {method}: {mv} not legal");
            assert_ne!(mv, Move::NONE);
            assert_eq!(agent.last_stats().depth_reached, 1);
        }
    }
}

#[test]
fn test_iterative_with_infinite_deadline_matches_fixed_depth() {
    for seed in 0..16 {
        let board = common::random_board(5, 5, 8, seed);
        let legal = board.legal_moves();
        if legal.is_empty() {
            continue;
        }
        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let mut iterative = agent(method, true, 1);
            let mv = iterative.select_move(&board, &legal, &FixedClock::INFINITE);
            let deepest = iterative.last_stats().depth_reached;
            assert!(deepest >= 1);
            assert!(!iterative.last_stats().timed_out);

            let mut fixed = agent(method, false, deepest);
            assert_eq!(
                fixed.select_move(&board, &legal, &FixedClock::INFINITE),
                mv,
                "seed {seed} {method} depth {deepest}"
            );
        }
    }
}

#[test]
fn test_deadline_sampled_on_every_node() {
    let board = Board::from_layout(common::LOPSIDED, Player::First).unwrap();
    let clock = ManualClock::new(f64::MAX, 0.0);
    let mut searcher = Searcher::new(Player::First, &MobilityEvaluator, &clock, 10.0);
    searcher.search(SearchMethod::Minimax, &board, 3).unwrap();
    assert_eq!(clock.polls(), searcher.stats().nodes);
}

#[test]
fn test_timeout_mid_search_keeps_previous_depth() {
    let board = Board::from_layout(common::LOPSIDED, Player::First).unwrap();
    let legal = board.legal_moves();

    // 深さ1は問い合わせなし。深さ2は 1+6+12 = 19 ノードで残り 16ms まで減り、
    // 深さ3（75 ノード）の途中でしきい値 10ms を下回る
    let clock = ManualClock::new(34.0, 1.0);
    let mut agent = agent(SearchMethod::Minimax, true, 1);
    let mv = agent.select_move(&board, &legal, &clock);
    assert_eq!(agent.last_stats().depth_reached, 2);
    assert!(agent.last_stats().timed_out);
    assert_eq!(mv, Move::new(3, 2));
}

#[test]
fn test_wall_clock_deadline_returns_in_time() {
    let board = common::random_board(7, 7, 4, 11);
    let legal = board.legal_moves();
    let timer = TurnTimer::start(Duration::from_millis(60));
    let mut agent = agent(SearchMethod::AlphaBeta, true, 3);
    let mv = agent.select_move(&board, &legal, &timer);
    assert!(legal.contains(&mv));
    assert!(!timer.expired(), "agent overran its budget by {} ms", -timer.remaining_ms());
}
