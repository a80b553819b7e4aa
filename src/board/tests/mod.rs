//! Unit tests for the board, codec, move generator, evaluator, and search.

mod eval;
mod proptest;

use crate::board::{Board, Color, Move, Square};

/// Parse a square, panicking on bad notation (test convenience).
pub(crate) fn sq(s: &str) -> Square {
    s.parse().expect("bad square in test")
}

/// Parse a move, panicking on bad notation (test convenience).
pub(crate) fn mv(s: &str) -> Move {
    s.parse().expect("bad move in test")
}

#[test]
fn starting_position_matches_fen_decode() {
    let built = Board::starting_position();
    let decoded = Board::try_from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
    assert_eq!(built, decoded);
}

#[test]
fn apply_moves_piece_and_clears_origin() {
    let board = Board::starting_position();
    let next = board.apply(mv("e2e4"));

    assert!(next.is_empty_at(sq("e2")));
    let piece = next.piece_at(sq("e4")).unwrap();
    assert_eq!(piece.color, Color::White);

    // The original board is untouched
    assert!(!board.is_empty_at(sq("e2")));
}

#[test]
fn apply_captures_by_replacement() {
    let board =
        Board::try_from_placement("8/8/8/3q4/4P3/8/8/8").unwrap();
    let next = board.apply(mv("e4d5"));

    let piece = next.piece_at(sq("d5")).unwrap();
    assert_eq!(piece.color, Color::White);
    assert_eq!(next.count_pieces(Color::Black), 0);
}

#[test]
fn boards_with_odd_king_counts_are_accepted() {
    // No invariant on piece counts: zero kings...
    let no_kings = Board::try_from_placement("8/8/8/3q4/8/8/8/8").unwrap();
    assert_eq!(no_kings.count_pieces(Color::Black), 1);

    // ...and multiple kings are both representable
    let three_kings = Board::try_from_placement("kkk5/8/8/8/8/8/8/K7").unwrap();
    assert_eq!(three_kings.count_pieces(Color::Black), 3);
}

#[test]
fn square_notation_round_trips() {
    for row in 0..8 {
        for col in 0..8 {
            let square = Square(row, col);
            let parsed: Square = square.to_string().parse().unwrap();
            assert_eq!(square, parsed);
        }
    }
}

#[test]
fn square_notation_corners() {
    assert_eq!(sq("a8"), Square(0, 0));
    assert_eq!(sq("h8"), Square(0, 7));
    assert_eq!(sq("a1"), Square(7, 0));
    assert_eq!(sq("h1"), Square(7, 7));
    assert_eq!(sq("e2"), Square(6, 4));
}

#[test]
fn move_notation_round_trips() {
    let m = mv("e2e4");
    assert_eq!(m.to_string(), "e2e4");
    assert_eq!(m.from, sq("e2"));
    assert_eq!(m.to, sq("e4"));
}
