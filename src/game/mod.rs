//! Game coordination: turn tracking, history, undo, and change observers.
//!
//! One `Game` owns the mutable state for a session. Callers pull the
//! current state with [`Game::state`] and may register push-style
//! observers with [`Game::on_change`]; there is no global singleton.

pub mod session;

use std::fmt;

use log::debug;

use crate::board::{Board, Color, Move, Square};

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// There is no piece on the origin square
    EmptySquare { square: Square },
    /// The piece on the origin square belongs to the side not on move
    WrongSide { square: Square, turn: Color },
    /// The destination is not reachable by the piece on the origin square
    IllegalDestination { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::WrongSide { square, turn } => {
                write!(f, "Piece on {square} does not belong to {turn}")
            }
            MoveError::IllegalDestination { mv } => {
                write!(f, "Illegal move {mv}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The state one game session carries: the board, whose turn it is, and
/// the moves played so far (display/undo only; the search never reads it).
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub history: Vec<Move>,
}

impl GameState {
    /// History rendered in 4-character "fromTo" form.
    #[must_use]
    pub fn history_notation(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }
}

type Observer = Box<dyn FnMut(&GameState) + Send>;

/// Owns a game's state and notifies observers after every change.
pub struct Game {
    state: GameState,
    initial_board: Board,
    initial_turn: Color,
    observers: Vec<Observer>,
}

impl Game {
    /// Start a new game from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Board::starting_position(), Color::White)
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn from_position(board: Board, turn: Color) -> Self {
        Game {
            state: GameState {
                board,
                turn,
                history: Vec::new(),
            },
            initial_board: board,
            initial_turn: turn,
            observers: Vec::new(),
        }
    }

    /// Current state (pull interface).
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.state.turn
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.state.history
    }

    /// Register an observer called after every state change (push
    /// interface). Observers see the state after the change is applied.
    pub fn on_change<F>(&mut self, observer: F)
    where
        F: FnMut(&GameState) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }

    /// Destination squares reachable from `from` under the movement rules.
    ///
    /// Turn-agnostic: asking about the opponent's piece answers for the
    /// opponent. An empty square yields an empty list.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.state
            .board
            .moves_from(from)
            .iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Validate and apply a move for the side on move.
    ///
    /// On success the board is replaced, the turn flips, the move is
    /// appended to history, and observers fire.
    pub fn try_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = self
            .state
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare { square: mv.from })?;

        if piece.color != self.state.turn {
            return Err(MoveError::WrongSide {
                square: mv.from,
                turn: self.state.turn,
            });
        }

        if !self.state.board.moves_from(mv.from).contains(mv) {
            return Err(MoveError::IllegalDestination { mv });
        }

        self.state.board = self.state.board.apply(mv);
        self.state.turn = self.state.turn.opponent();
        self.state.history.push(mv);
        debug!("applied {mv}, {} to move", self.state.turn);
        self.notify();
        Ok(())
    }

    /// Take back the last ply by replaying history from the initial
    /// position. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.state.history.is_empty() {
            return false;
        }

        let mut replay = self.state.history.clone();
        replay.pop();

        let mut board = self.initial_board;
        let mut turn = self.initial_turn;
        for mv in &replay {
            board = board.apply(*mv);
            turn = turn.opponent();
        }

        self.state.board = board;
        self.state.turn = turn;
        self.state.history = replay;
        debug!("undo, {} to move", self.state.turn);
        self.notify();
        true
    }

    /// Reset to the game's initial position, clearing history.
    pub fn new_game(&mut self) {
        self.state.board = self.initial_board;
        self.state.turn = self.initial_turn;
        self.state.history.clear();
        self.notify();
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
