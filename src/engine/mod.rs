//! Client for an external UCI-speaking engine process.
//!
//! The core search never depends on this; it exists so a session can hand
//! move selection to a stronger engine. The client owns the child process
//! and enforces the request discipline the text protocol itself lacks:
//! one request in flight at a time, each tagged with a correlation id so
//! a stale reply can never be attributed to a later request.

mod client;
mod protocol;

use std::fmt;
use std::io;

pub use client::EngineClient;
pub use protocol::{parse_bestmove, GoCommand};

/// Error type for engine-client failures
#[derive(Debug)]
pub enum EngineError {
    /// The engine process is gone or never came up
    Unavailable { reason: String },
    /// A request is already in flight
    Busy,
    /// The engine did not answer within the deadline
    Timeout,
    /// The engine answered with something unparseable
    Protocol { line: String },
    /// Pipe-level failure talking to the child process
    Io(io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Unavailable { reason } => {
                write!(f, "Engine unavailable: {reason}")
            }
            EngineError::Busy => write!(f, "A request is already in flight"),
            EngineError::Timeout => write!(f, "Engine did not answer in time"),
            EngineError::Protocol { line } => {
                write!(f, "Unparseable engine reply: '{line}'")
            }
            EngineError::Io(e) => write!(f, "Engine I/O error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(e: io::Error) -> Self {
        EngineError::Io(e)
    }
}
