//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! This module implements:
//! - Plain depth-limited minimax over pseudo-legal moves
//! - Alpha-beta pruning (maximizer raises alpha, minimizer lowers beta,
//!   siblings are skipped once alpha >= beta)
//! - Deterministic tie-breaking: the first-generated move wins ties
//!
//! Deliberately absent: transposition table, quiescence, iterative
//! deepening, move ordering. Every node re-evaluates from scratch over a
//! by-value board copy, which is correctness-safe and fast enough at the
//! depths the difficulty tiers allow (<= 3).

use std::time::{Duration, Instant};

use super::state::Board;
use super::types::{Color, Move};

/// Larger than any reachable material score (a board packed with 64 kings
/// evaluates to 1,280,000).
const INF: i32 = 2_000_000;

/// Result of a search.
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    /// The best move found, or `None` if the side to move has no
    /// pseudo-legal moves at the root. The caller cannot distinguish
    /// checkmate, stalemate, or an empty side from this alone; check is
    /// not modeled.
    pub best_move: Option<Move>,
    /// Score of the chosen line from the searched side's perspective;
    /// the static evaluation when there is no move.
    pub score: i32,
    /// Requested search depth in plies
    pub depth: u32,
    /// Nodes visited
    pub nodes: u64,
    /// Wall-clock search time
    pub elapsed: Duration,
}

impl SearchReport {
    /// Nodes per second, guarding the zero-elapsed case.
    #[must_use]
    pub fn nps(&self) -> u64 {
        let elapsed_ms = self.elapsed.as_millis() as u64;
        if elapsed_ms == 0 {
            self.nodes
        } else {
            (self.nodes * 1000) / elapsed_ms
        }
    }
}

/// Pick the best move for `side` at the given depth.
///
/// Returns `None` when `side` has zero pseudo-legal moves.
#[must_use]
pub fn best_move(board: &Board, side: Color, depth: u32) -> Option<Move> {
    search_with_report(board, side, depth).best_move
}

/// Pick the best move for `side`, returning node and timing statistics
/// along with it.
///
/// The root loop scores each move in generation order with a fresh full
/// window and keeps the incumbent on ties (strict `>` comparison), so the
/// choice is reproducible run to run. Depth 0 degrades to choosing among
/// the immediate moves by their resulting static evaluation.
#[must_use]
pub fn search_with_report(board: &Board, side: Color, depth: u32) -> SearchReport {
    let start = Instant::now();
    let mut ctx = SearchContext {
        root_side: side,
        nodes: 0,
    };

    let moves = board.all_moves(side);
    let mut best: Option<Move> = None;
    let mut best_score = -INF;

    for mv in &moves {
        let child = board.apply(*mv);
        let score = ctx.minimax(
            &child,
            side.opponent(),
            depth.saturating_sub(1),
            -INF,
            INF,
            false,
        );
        if score > best_score {
            best_score = score;
            best = Some(*mv);
        }
    }

    let score = if best.is_some() {
        best_score
    } else {
        board.evaluate(side)
    };

    SearchReport {
        best_move: best,
        score,
        depth,
        nodes: ctx.nodes,
        elapsed: start.elapsed(),
    }
}

/// State threaded through one search: the side being maximized for and a
/// node counter. Everything else lives on the call stack.
struct SearchContext {
    root_side: Color,
    nodes: u64,
}

impl SearchContext {
    /// Standard minimax with alpha-beta over `(board, to_move, depth)`.
    ///
    /// `maximizing` is true when `to_move` is the root side. Evaluation is
    /// always from the root side's perspective, so the maximizer wants
    /// large scores and the minimizer small ones.
    ///
    /// A side with no moves falls through to the static evaluation; check
    /// is not modeled, so blocked and mated positions look the same.
    fn minimax(
        &mut self,
        board: &Board,
        to_move: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return board.evaluate(self.root_side);
        }

        let moves = board.all_moves(to_move);
        if moves.is_empty() {
            return board.evaluate(self.root_side);
        }

        if maximizing {
            let mut best = -INF;
            for mv in &moves {
                let child = board.apply(*mv);
                let score =
                    self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mv in &moves {
                let child = board.apply(*mv);
                let score = self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
