//! FEN codec for the placement field and side to move.
//!
//! Only the placement and turn fields are modeled. Castling rights, the en
//! passant target, and the move clocks are not tracked, so `to_fen` emits
//! the fixed placeholder tail `KQkq - 0 1` and parsing ignores whatever it
//! finds in those positions.

use std::str::FromStr;

use super::error::FenError;
use super::state::Board;
use super::types::{Color, Piece, Square};

/// The standard starting position as a full FEN string.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse the FEN placement field (`rank8/rank7/.../rank1`).
    ///
    /// Digits expand to that many empty squares; any other character must be
    /// a piece code. Exactly 8 ranks are required and every rank must expand
    /// to exactly 8 columns; anything else is rejected rather than silently
    /// misplacing pieces.
    pub fn try_from_placement(field: &str) -> Result<Self, FenError> {
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(d) = c.to_digit(10) {
                    col += d as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::BadRankWidth {
                            rank: row,
                            width: col + 1,
                        });
                    }
                    board.set(Square(row, col), Some(piece));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::BadRankWidth { rank: row, width: col });
            }
        }
        Ok(board)
    }

    /// Parse a full FEN string, consuming the placement and turn fields.
    ///
    /// Returns the board and the side to move. The remaining fields
    /// (castling, en passant, clocks) are accepted and ignored.
    pub fn try_from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::WrongRankCount { found: 0 })?;
        let board = Board::try_from_placement(placement)?;

        let turn_field = parts.next().ok_or(FenError::MissingTurnField)?;
        let turn = match turn_field {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok((board, turn))
    }

    /// Parse a full FEN string.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> (Self, Color) {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Encode the placement field alone.
    ///
    /// Runs of empty squares collapse into a digit; ranks are joined by `/`,
    /// rank 8 first.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut ranks: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some(piece) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        ranks.join("/")
    }

    /// Encode a full FEN string for the given side to move.
    ///
    /// The castling, en passant, and clock fields are emitted as the fixed
    /// placeholders `KQkq - 0 1` since none of them are tracked.
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color) -> String {
        format!(
            "{} {} KQkq - 0 1",
            self.to_placement(),
            side_to_move.to_fen_char()
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    /// Parse the placement field of a FEN string (turn and later fields,
    /// if present, are ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let placement = s.split_whitespace().next().unwrap_or("");
        Board::try_from_placement(placement)
    }
}
