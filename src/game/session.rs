//! Serialized session state.
//!
//! A `SessionRecord` is the `{board, turn, history}` shape the hosting
//! layer persists between visits. The board travels as a FEN placement
//! field and moves as 4-character "fromTo" strings, so the record stays
//! readable and stable across versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, FenError, Move};

use super::Game;

/// Error type for session restore failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Board placement did not parse
    BadPlacement(FenError),
    /// Turn field was not 'w' or 'b'
    BadTurn { found: char },
    /// A history entry was not valid coordinate notation
    BadHistoryMove { entry: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::BadPlacement(e) => write!(f, "Bad board placement: {e}"),
            SessionError::BadTurn { found } => {
                write!(f, "Bad turn field '{found}', expected 'w' or 'b'")
            }
            SessionError::BadHistoryMove { entry } => {
                write!(f, "Bad history entry '{entry}'")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl From<FenError> for SessionError {
    fn from(e: FenError) -> Self {
        SessionError::BadPlacement(e)
    }
}

/// The persisted shape of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// FEN placement field for the current board
    pub placement: String,
    /// 'w' or 'b'
    pub turn: char,
    /// Moves played, in "fromTo" form
    pub history: Vec<String>,
}

impl SessionRecord {
    /// Capture the current state of a game.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        let state = game.state();
        SessionRecord {
            placement: state.board.to_placement(),
            turn: state.turn.to_fen_char(),
            history: state.history_notation(),
        }
    }

    /// Rebuild a game from the record.
    ///
    /// The restored game's board and turn come from the record; history is
    /// carried over so undo keeps working. Sessions always begin at the
    /// standard starting position, which is what undo replays from.
    pub fn restore(&self) -> Result<Game, SessionError> {
        let board = Board::try_from_placement(&self.placement)?;
        let turn = Color::from_fen_char(self.turn).ok_or(SessionError::BadTurn {
            found: self.turn,
        })?;

        let mut history = Vec::with_capacity(self.history.len());
        for entry in &self.history {
            let mv = Move::from_str(entry).map_err(|_| SessionError::BadHistoryMove {
                entry: entry.clone(),
            })?;
            history.push(mv);
        }

        let mut game = Game::new();
        game.restore_state(board, turn, history);
        Ok(game)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Game {
    /// Overwrite the live state from a restored session record.
    pub(crate) fn restore_state(&mut self, board: Board, turn: Color, history: Vec<Move>) {
        let state = self.state_mut();
        state.board = board;
        state.turn = turn;
        state.history = history;
    }

    fn state_mut(&mut self) -> &mut super::GameState {
        &mut self.state
    }
}
