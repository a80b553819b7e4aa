//! Board representation and game logic.
//!
//! An 8x8 grid of optional pieces with a FEN codec, pseudo-legal move
//! generation for all six piece types, material evaluation, and a
//! minimax-with-alpha-beta search over the lot.
//!
//! The movement rules are deliberately simplified: no check detection, no
//! castling, no en passant, no promotion, no draw rules. See the module
//! docs on `movegen` and `search` for what that implies.
//!
//! # Example
//! ```
//! use woodpusher::board::{search, Board, Color};
//!
//! let board = Board::starting_position();
//! let moves = board.all_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let mv = search::best_move(&board, Color::White, 2);
//! assert!(mv.is_some());
//! ```

mod error;
mod eval;
mod fen;
mod movegen;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use state::Board;
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Square};

pub use search::{best_move, search_with_report, SearchReport};
