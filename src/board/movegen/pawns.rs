//! Pawn pushes and captures.

use super::super::state::Board;
use super::super::types::{Color, Move, MoveList, Square};

impl Board {
    /// Pawn rule: one forward if empty; two from the start row if both
    /// squares are empty; diagonal captures only onto enemy pieces.
    /// No en passant and no promotion: a pawn reaching the last rank
    /// simply stays a pawn.
    pub(crate) fn pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty_at(forward) {
                moves.push(Move::new(from, forward));
                if from.row() == color.pawn_start_row() {
                    // offset cannot leave the board from the start row
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty_at(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if let Some(occupant) = self.piece_at(target) {
                    if occupant.color != color {
                        moves.push(Move::new(from, target));
                    }
                }
            }
        }
    }
}
