//! King steps over a precomputed per-square target table.

use once_cell::sync::Lazy;

use super::super::state::Board;
use super::super::types::{Color, MoveList, Square};

/// King offsets: the 8 unit directions in (dr, dc) row-major order
const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// On-board king targets for every square, in offset order
static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        KING_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect()
    })
});

impl Board {
    /// King rule: one step in any direction; same occupancy rule as the
    /// knight. No castling and no does-this-walk-into-check filtering.
    pub(crate) fn king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.as_index()] {
            self.push_step(from, to, color, moves);
        }
    }
}
