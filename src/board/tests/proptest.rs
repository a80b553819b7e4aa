//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Board, Color, Piece, PieceKind, Square};

/// Strategy: one square's content as 0 (empty), 1-6 (white piece kinds),
/// 7-12 (black piece kinds)
fn square_strategy() -> impl Strategy<Value = u8> {
    0u8..13
}

fn decode_square(code: u8) -> Option<Piece> {
    if code == 0 {
        return None;
    }
    let kinds = PieceKind::ALL;
    let idx = ((code - 1) % 6) as usize;
    let color = if code <= 6 { Color::White } else { Color::Black };
    Some(Piece::new(kinds[idx], color))
}

fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::collection::vec(square_strategy(), 64).prop_map(|codes| {
        let mut board = Board::empty();
        for (idx, &code) in codes.iter().enumerate() {
            board.set(Square::from_index(idx), decode_square(code));
        }
        board
    })
}

proptest! {
    /// Property: the placement field round-trips for any board
    #[test]
    fn prop_placement_roundtrip(board in board_strategy()) {
        let placement = board.to_placement();
        let restored = Board::try_from_placement(&placement).unwrap();
        prop_assert_eq!(board, restored);
    }

    /// Property: encode(decode(F)) == F for every encoder-produced F
    #[test]
    fn prop_placement_is_canonical(board in board_strategy()) {
        let field = board.to_placement();
        let reencoded = Board::try_from_placement(&field).unwrap().to_placement();
        prop_assert_eq!(field, reencoded);
    }

    /// Property: generated moves stay on the board and never land on a
    /// friendly piece
    #[test]
    fn prop_moves_respect_occupancy(board in board_strategy()) {
        for side in Color::BOTH {
            for mv in &board.all_moves(side) {
                let mover = board.piece_at(mv.from).expect("move from empty square");
                prop_assert_eq!(mover.color, side);
                if let Some(target) = board.piece_at(mv.to) {
                    prop_assert_ne!(target.color, side);
                }
            }
        }
    }

    /// Property: `moves_from` agrees with the side-filtered `all_moves`
    #[test]
    fn prop_all_moves_is_union_of_moves_from(board in board_strategy()) {
        for side in Color::BOTH {
            let all: Vec<_> = board.all_moves(side).into_iter().collect();
            let mut collected = Vec::new();
            for (from, piece) in board.pieces() {
                if piece.color == side {
                    collected.extend(board.moves_from(from));
                }
            }
            prop_assert_eq!(all, collected);
        }
    }

    /// Property: evaluation perspectives are exact negations
    #[test]
    fn prop_eval_antisymmetry(board in board_strategy()) {
        prop_assert_eq!(
            board.evaluate(Color::White),
            -board.evaluate(Color::Black)
        );
    }
}

/// Random playouts from the starting position keep the codec in sync,
/// seeded so failures reproduce.
#[test]
fn random_playout_placement_roundtrip() {
    use rand::prelude::*;

    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::starting_position();
        let mut side = Color::White;

        for _ in 0..40 {
            let moves = board.all_moves(side);
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            board = board.apply(moves[idx]);
            side = side.opponent();

            let restored = Board::try_from_placement(&board.to_placement()).unwrap();
            assert_eq!(board, restored, "seed {seed}");
        }
    }
}
