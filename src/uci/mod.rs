//! The engine side of the UCI text protocol.
//!
//! Serves `uci`, `isready`, `ucinewgame`, `position`, `setoption`, `go`,
//! and `quit` over stdin/stdout so any UCI-speaking host can drive the
//! engine. Search depth comes from the `Skill Level` option through the
//! difficulty tiers; `go depth <n>` overrides it for one search.

pub mod command;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::{debug, info};

use crate::board::{Board, Color, FenError, Move};
use crate::difficulty::SkillLevel;

pub use command::{parse_uci_command, UciCommand};

/// Hard ceiling on requested depth; recursion is only stack-bounded by it.
const MAX_DEPTH: u32 = 20;

/// Error type for UCI position command parsing
#[derive(Debug, Clone)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid or inapplicable move in the move list
    InvalidMove { move_str: String },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str } => {
                write!(f, "Invalid move '{move_str}'")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// A position under UCI control: the board plus the side to move.
#[derive(Clone, Copy, Debug)]
pub struct Position {
    pub board: Board,
    pub turn: Color,
}

impl Position {
    #[must_use]
    pub fn startpos() -> Self {
        Position {
            board: Board::starting_position(),
            turn: Color::White,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

/// Parse a UCI position command into `position`.
///
/// Supports both `position startpos` and `position fen <fen>` formats,
/// optionally followed by `moves <move1> <move2> ...`. Moves are applied
/// with the same validation the game coordinator uses: the origin must
/// hold a piece of the side to move and the destination must be reachable.
pub fn try_parse_position_command(
    position: &mut Position,
    parts: &[&str],
) -> Result<(), UciError> {
    let mut i = 1;

    if i >= parts.len() {
        return Err(UciError::MissingParts);
    }

    if parts[i] == "startpos" {
        *position = Position::startpos();
        i += 1;
    } else if parts[i] == "fen" {
        i += 1;
        let fen_start = i;
        while i < parts.len() && parts[i] != "moves" {
            i += 1;
        }
        if fen_start == i {
            return Err(UciError::MissingParts);
        }
        let fen = parts[fen_start..i].join(" ");
        let (board, turn) = Board::try_from_fen(&fen)?;
        *position = Position { board, turn };
    } else {
        return Err(UciError::MissingParts);
    }

    if i < parts.len() && parts[i] == "moves" {
        i += 1;
        while i < parts.len() {
            apply_uci_move(position, parts[i])?;
            i += 1;
        }
    }

    Ok(())
}

fn apply_uci_move(position: &mut Position, move_str: &str) -> Result<(), UciError> {
    let mv = Move::from_str(move_str).map_err(|_| UciError::InvalidMove {
        move_str: move_str.to_string(),
    })?;

    let piece = position.board.piece_at(mv.from);
    let playable = piece.is_some_and(|p| p.color == position.turn)
        && position.board.moves_from(mv.from).contains(mv);
    if !playable {
        return Err(UciError::InvalidMove {
            move_str: move_str.to_string(),
        });
    }

    position.board = position.board.apply(mv);
    position.turn = position.turn.opponent();
    Ok(())
}

/// Parse a UCI position command, logging errors instead of propagating.
pub fn parse_position_command(position: &mut Position, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(position, parts) {
        eprintln!("Error: {e}");
    }
}

/// Resolve the depth for a `go` command.
///
/// `go depth <n>` clamps to 1..=20; `go movetime <ms>` (and a bare `go`)
/// search at the skill level's depth, since the engine is depth-bounded
/// and a time budget only selects the tier already configured.
#[must_use]
pub fn resolve_go_depth(parts: &[String], skill: SkillLevel) -> u32 {
    let mut i = 1;
    while i < parts.len() {
        match parts[i].as_str() {
            "depth" => {
                if let Some(n) = parts.get(i + 1).and_then(|v| v.parse::<u32>().ok()) {
                    return n.clamp(1, MAX_DEPTH);
                }
                i += 2;
            }
            "movetime" => {
                debug!("movetime requested, searching at skill depth instead");
                i += 2;
            }
            _ => i += 1,
        }
    }
    skill.search_depth()
}

/// Extract the value of `setoption name Skill Level value <n>`, if that is
/// what the command sets.
#[must_use]
pub fn parse_skill_option(parts: &[String]) -> Option<u8> {
    // setoption name Skill Level value <n>
    let name_pos = parts.iter().position(|p| p == "name")?;
    let value_pos = parts.iter().position(|p| p == "value")?;
    if value_pos <= name_pos {
        return None;
    }
    let name = parts[name_pos + 1..value_pos].join(" ");
    if !name.eq_ignore_ascii_case("skill level") {
        return None;
    }
    parts.get(value_pos + 1)?.parse().ok()
}

/// Format a move for UCI output.
#[must_use]
pub fn format_uci_move(mv: &Move) -> String {
    mv.to_string()
}

/// Run the blocking UCI loop over stdin/stdout.
pub fn run_uci_loop() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut position = Position::startpos();
    let mut skill = SkillLevel::default();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };

        match cmd {
            UciCommand::Uci => {
                let _ = writeln!(out, "id name woodpusher {}", env!("CARGO_PKG_VERSION"));
                let _ = writeln!(out, "id author the woodpusher developers");
                let _ = writeln!(
                    out,
                    "option name Skill Level type spin default 5 min 0 max 20"
                );
                let _ = writeln!(out, "uciok");
            }
            UciCommand::IsReady => {
                let _ = writeln!(out, "readyok");
            }
            UciCommand::UciNewGame => {
                position = Position::startpos();
                info!("new game");
            }
            UciCommand::Position(parts) => {
                let borrowed: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut position, &borrowed);
            }
            UciCommand::SetOption(parts) => {
                if let Some(level) = parse_skill_option(&parts) {
                    skill = SkillLevel::new(level);
                    info!("skill level set to {skill}");
                }
            }
            UciCommand::Go(parts) => {
                let depth = resolve_go_depth(&parts, skill);
                let report =
                    crate::board::search_with_report(&position.board, position.turn, depth);
                let _ = writeln!(
                    out,
                    "info depth {} score cp {} nodes {} nps {} time {}",
                    report.depth,
                    report.score,
                    report.nodes,
                    report.nps(),
                    report.elapsed.as_millis()
                );
                match report.best_move {
                    Some(mv) => {
                        let _ = writeln!(out, "bestmove {}", format_uci_move(&mv));
                    }
                    None => {
                        // No pseudo-legal move: mate, stalemate, and an
                        // empty side all land here
                        let _ = writeln!(out, "bestmove 0000");
                    }
                }
            }
            UciCommand::Quit => break,
            UciCommand::Unknown(text) => {
                debug!("unknown command: {text}");
            }
        }
        let _ = out.flush();
    }
}
