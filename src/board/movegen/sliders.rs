//! Sliding-piece ray walks (bishop, rook, queen).

use super::super::state::Board;
use super::super::types::{Color, MoveList, Square};

impl Board {
    /// Walk each direction one square at a time. Every empty square is a
    /// destination and the walk continues; the first occupied square ends
    /// the ray, and is a destination only when it holds an enemy piece.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                if !self.push_step(from, to, color, moves) {
                    break;
                }
                current = to;
            }
        }
    }
}
