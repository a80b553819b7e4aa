//! Pseudo-legal move generation.
//!
//! Moves obey per-piece movement and capture shape plus board occupancy,
//! and nothing else: no check filtering, no castling, no en passant, no
//! promotion. A side with zero pseudo-legal moves is simply a side that
//! cannot move; whether that is mate, stalemate, or an empty board is not
//! this module's concern.
//!
//! Generation order is deterministic and load-bearing: `all_moves` scans
//! squares row-major (a8 first) and each piece emits its moves in a fixed
//! per-piece direction order. Search tie-breaks depend on this order.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Board;
use super::types::{Color, Move, MoveList, PieceKind, Square};

/// Bishop ray directions, in generation order
pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rook ray directions, in generation order
pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Queen ray directions: rook rays first, then bishop rays
pub(crate) const QUEEN_DIRS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Generate pseudo-legal moves for the piece on `from`.
    ///
    /// An empty square yields an empty list; callers treat that as a no-op,
    /// not an error. The same applies to `all_moves` when the piece belongs
    /// to the other side.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        let Some(piece) = self.piece_at(from) else {
            return moves;
        };

        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, piece.color, &mut moves),
            PieceKind::Knight => self.knight_moves(from, piece.color, &mut moves),
            PieceKind::Bishop => self.slider_moves(from, piece.color, &BISHOP_DIRS, &mut moves),
            PieceKind::Rook => self.slider_moves(from, piece.color, &ROOK_DIRS, &mut moves),
            PieceKind::Queen => self.slider_moves(from, piece.color, &QUEEN_DIRS, &mut moves),
            PieceKind::King => self.king_moves(from, piece.color, &mut moves),
        }
        moves
    }

    /// Generate all pseudo-legal moves for one side.
    ///
    /// Scans the board row-major (a8, b8, ..., h1) and keeps only pieces of
    /// the requested color. Move lists are produced fresh per call; nothing
    /// is cached.
    #[must_use]
    pub fn all_moves(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces() {
            if piece.color != side {
                continue;
            }
            for mv in &self.moves_from(from) {
                moves.push(*mv);
            }
        }
        moves
    }

    /// Push `from -> to` if the destination is empty or enemy-occupied.
    /// Returns true if the destination square was empty (a ray may continue).
    pub(crate) fn push_step(
        &self,
        from: Square,
        to: Square,
        mover: Color,
        moves: &mut MoveList,
    ) -> bool {
        match self.piece_at(to) {
            None => {
                moves.push(Move::new(from, to));
                true
            }
            Some(occupant) => {
                if occupant.color != mover {
                    moves.push(Move::new(from, to));
                }
                false
            }
        }
    }
}
