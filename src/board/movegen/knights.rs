//! Knight jumps over a precomputed per-square target table.

use once_cell::sync::Lazy;

use super::super::state::Board;
use super::super::types::{Color, MoveList, Square};

/// Knight offsets in generation order
const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight targets for every square, in offset order
static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect()
    })
});

impl Board {
    /// Knight rule: the 8 fixed jumps; legal if on-board and not occupied
    /// by a friendly piece.
    pub(crate) fn knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            self.push_step(from, to, color, moves);
        }
    }
}
