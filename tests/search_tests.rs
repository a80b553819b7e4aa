//! Search properties: alpha-beta equivalence with plain minimax,
//! deterministic tie-breaking, and the difficulty tiers end to end.

use woodpusher::board::{best_move, search_with_report, Board, Color, Move};
use woodpusher::SkillLevel;

/// Reference minimax without pruning, used as an oracle. Mirrors the
/// engine's conventions: evaluation from the root side's perspective,
/// no-move nodes fall through to the static evaluation.
fn plain_minimax(board: &Board, to_move: Color, depth: u32, root_side: Color) -> i32 {
    if depth == 0 {
        return board.evaluate(root_side);
    }
    let moves = board.all_moves(to_move);
    if moves.is_empty() {
        return board.evaluate(root_side);
    }

    let maximizing = to_move == root_side;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in &moves {
        let child = board.apply(*mv);
        let score = plain_minimax(&child, to_move.opponent(), depth - 1, root_side);
        if maximizing {
            best = best.max(score);
        } else {
            best = best.min(score);
        }
    }
    best
}

/// Root of the oracle: strict `>` against the running best, first move
/// wins ties, matching the tie-break contract of the real search.
fn plain_best_move(board: &Board, side: Color, depth: u32) -> (Option<Move>, i32) {
    let moves = board.all_moves(side);
    let mut best = None;
    let mut best_score = i32::MIN;
    for mv in &moves {
        let child = board.apply(*mv);
        let score = plain_minimax(&child, side.opponent(), depth.saturating_sub(1), side);
        if score > best_score {
            best_score = score;
            best = Some(*mv);
        }
    }
    if best.is_none() {
        best_score = board.evaluate(side);
    }
    (best, best_score)
}

/// Small synthetic positions (six pieces or fewer)
const POSITIONS: &[&str] = &[
    "k7/8/8/3q4/4P3/8/8/K7",
    "k7/4p3/3p4/8/8/8/8/3Q3K",
    "k7/8/8/3r4/8/2B5/8/K7",
    "8/2p5/8/3N4/8/8/5P2/K6k",
    "k7/8/8/4p3/3Q4/8/8/K7",
    "8/1b6/8/3R4/8/8/8/KN5k",
    "8/8/8/8/8/p7/P7/8",
];

#[test]
fn alpha_beta_matches_plain_minimax() {
    for placement in POSITIONS {
        let board = Board::try_from_placement(placement).unwrap();
        for side in Color::BOTH {
            for depth in 1..=3 {
                let report = search_with_report(&board, side, depth);
                let (oracle_move, oracle_score) = plain_best_move(&board, side, depth);

                assert_eq!(
                    report.best_move, oracle_move,
                    "move mismatch at {placement} {side} depth {depth}"
                );
                assert_eq!(
                    report.score, oracle_score,
                    "score mismatch at {placement} {side} depth {depth}"
                );
            }
        }
    }
}

#[test]
fn alpha_beta_matches_plain_minimax_from_start() {
    let board = Board::starting_position();
    for depth in 1..=2 {
        for side in Color::BOTH {
            let report = search_with_report(&board, side, depth);
            let (oracle_move, oracle_score) = plain_best_move(&board, side, depth);
            assert_eq!(report.best_move, oracle_move, "{side} depth {depth}");
            assert_eq!(report.score, oracle_score, "{side} depth {depth}");
        }
    }
}

#[test]
fn pruning_visits_no_more_nodes_than_exhaustive_search() {
    // Sanity bound: at depth 3 from the start, alpha-beta must stay well
    // under the full 20^3 leaf count an exhaustive search would touch
    let board = Board::starting_position();
    let report = search_with_report(&board, Color::White, 3);
    assert!(report.nodes < 20u64.pow(3) + 20u64.pow(2) + 21);
}

#[test]
fn search_is_deterministic_across_runs() {
    let board = Board::starting_position();
    let first = best_move(&board, Color::White, 2);
    for _ in 0..5 {
        assert_eq!(best_move(&board, Color::White, 2), first);
    }
}

#[test]
fn skill_tiers_drive_search_depth() {
    let board = Board::starting_position();
    for (level, expected_depth) in [(0u8, 1u32), (5, 1), (6, 2), (15, 2), (16, 3), (20, 3)] {
        let depth = SkillLevel::new(level).search_depth();
        assert_eq!(depth, expected_depth);
        let report = search_with_report(&board, Color::White, depth);
        assert_eq!(report.depth, expected_depth);
        assert!(report.best_move.is_some());
    }
}

#[test]
fn both_sides_find_moves_through_an_opening() {
    // Play a few plies alternating searches; every position must yield a
    // move and the move must be playable
    let mut board = Board::starting_position();
    let mut side = Color::White;
    for _ in 0..10 {
        let mv = best_move(&board, side, 2).expect("side ran out of moves in the opening");
        assert!(board.moves_from(mv.from).contains(mv));
        board = board.apply(mv);
        side = side.opponent();
    }
}
