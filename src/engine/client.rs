//! Engine process management and request correlation.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, trace, warn};
use parking_lot::Mutex;

use crate::board::Move;
use crate::difficulty::SkillLevel;

use super::protocol::{parse_bestmove, GoCommand};
use super::EngineError;

const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(5);

/// Handshake acknowledgements forwarded by the reader thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ack {
    UciOk,
    ReadyOk,
}

/// The request currently in flight, if any. The reader thread takes it out
/// of the slot when the matching `bestmove` arrives; a timed-out requester
/// clears it only if the id still matches, so a reply can never be
/// delivered to the wrong caller.
struct Pending {
    id: u64,
    reply: mpsc::Sender<Result<Move, String>>,
}

/// A running external engine.
///
/// Requests are single-flight: calling [`EngineClient::best_move`] while a
/// request is outstanding fails with [`EngineError::Busy`] instead of
/// silently stealing the earlier request's reply.
pub struct EngineClient {
    child: Child,
    stdin: ChildStdin,
    pending: Arc<Mutex<Option<Pending>>>,
    ack_rx: mpsc::Receiver<Ack>,
    alive: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
    next_id: u64,
    skill: SkillLevel,
}

impl EngineClient {
    /// Spawn an engine process and complete the UCI handshake
    /// (`uci`/`uciok`, `isready`/`readyok`), then apply the default skill
    /// level.
    pub fn spawn(program: &str) -> Result<Self, EngineError> {
        let mut child = Command::new(program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| EngineError::Unavailable {
                reason: format!("failed to start '{program}': {e}"),
            })?;

        let stdin = child.stdin.take().ok_or(EngineError::Unavailable {
            reason: "engine stdin not captured".to_string(),
        })?;
        let stdout = child.stdout.take().ok_or(EngineError::Unavailable {
            reason: "engine stdout not captured".to_string(),
        })?;

        let pending: Arc<Mutex<Option<Pending>>> = Arc::new(Mutex::new(None));
        let alive = Arc::new(AtomicBool::new(true));
        let (ack_tx, ack_rx) = mpsc::channel();

        let reader = thread::Builder::new()
            .name("engine-reader".to_string())
            .spawn({
                let pending = Arc::clone(&pending);
                let alive = Arc::clone(&alive);
                move || reader_loop(stdout, &pending, &alive, &ack_tx)
            })
            .map_err(|e| EngineError::Unavailable {
                reason: format!("failed to spawn reader thread: {e}"),
            })?;

        let mut client = EngineClient {
            child,
            stdin,
            pending,
            ack_rx,
            alive,
            reader: Some(reader),
            next_id: 0,
            skill: SkillLevel::default(),
        };

        client.send_line("uci")?;
        client.wait_ack(Ack::UciOk)?;
        client.send_line("isready")?;
        client.wait_ack(Ack::ReadyOk)?;
        client.send_line(&format!(
            "setoption name Skill Level value {}",
            client.skill.level()
        ))?;
        debug!("engine '{program}' ready");
        Ok(client)
    }

    /// Current skill level.
    #[must_use]
    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    /// Change the engine's skill level.
    pub fn set_skill(&mut self, skill: SkillLevel) -> Result<(), EngineError> {
        self.skill = skill;
        self.send_line(&format!("setoption name Skill Level value {}", skill.level()))
    }

    /// Tell the engine a new game starts, and wait until it is ready.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        self.send_line("ucinewgame")?;
        self.send_line("isready")?;
        self.wait_ack(Ack::ReadyOk)
    }

    /// Ask for the best move in the given position.
    ///
    /// Exactly one request may be in flight; a concurrent call gets
    /// [`EngineError::Busy`]. The reply is matched by correlation id and
    /// delivered over a dedicated channel; if the engine misses the
    /// deadline the request is withdrawn and [`EngineError::Timeout`] is
    /// returned, and a reply that straggles in afterwards is dropped.
    pub fn best_move(
        &mut self,
        fen: &str,
        go: GoCommand,
        timeout: Duration,
    ) -> Result<Move, EngineError> {
        if !self.alive.load(Ordering::Relaxed) {
            return Err(EngineError::Unavailable {
                reason: "engine process exited".to_string(),
            });
        }

        let (tx, rx) = mpsc::channel();
        self.next_id += 1;
        let id = self.next_id;
        {
            let mut slot = self.pending.lock();
            if slot.is_some() {
                return Err(EngineError::Busy);
            }
            *slot = Some(Pending { id, reply: tx });
        }

        if let Err(e) = self
            .send_line(&format!("position fen {fen}"))
            .and_then(|()| self.send_line(&go.to_string()))
        {
            self.withdraw(id);
            return Err(e);
        }

        match rx.recv_timeout(timeout) {
            Ok(Ok(mv)) => Ok(mv),
            Ok(Err(line)) => Err(EngineError::Protocol { line }),
            Err(_) => {
                self.withdraw(id);
                if self.alive.load(Ordering::Relaxed) {
                    Err(EngineError::Timeout)
                } else {
                    Err(EngineError::Unavailable {
                        reason: "engine process exited".to_string(),
                    })
                }
            }
        }
    }

    /// Remove our pending request, leaving any newer one untouched.
    fn withdraw(&self, id: u64) {
        let mut slot = self.pending.lock();
        if slot.as_ref().is_some_and(|p| p.id == id) {
            *slot = None;
        }
    }

    fn send_line(&mut self, line: &str) -> Result<(), EngineError> {
        trace!("-> engine: {line}");
        writeln!(self.stdin, "{line}")?;
        self.stdin.flush()?;
        Ok(())
    }

    fn wait_ack(&self, expected: Ack) -> Result<(), EngineError> {
        loop {
            match self.ack_rx.recv_timeout(HANDSHAKE_TIMEOUT) {
                Ok(ack) if ack == expected => return Ok(()),
                // A stale ack from an earlier exchange; keep waiting
                Ok(_) => {}
                Err(_) => {
                    return Err(EngineError::Unavailable {
                        reason: format!("no {expected:?} from engine"),
                    })
                }
            }
        }
    }
}

impl Drop for EngineClient {
    fn drop(&mut self) {
        let _ = self.send_line("quit");
        let _ = self.child.kill();
        let _ = self.child.wait();
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }
}

/// Reads engine output line by line, forwarding handshake acks and
/// delivering `bestmove` replies to the pending request.
fn reader_loop(
    stdout: ChildStdout,
    pending: &Mutex<Option<Pending>>,
    alive: &AtomicBool,
    ack_tx: &mpsc::Sender<Ack>,
) {
    let reader = BufReader::new(stdout);
    for line in reader.lines() {
        let Ok(line) = line else { break };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        trace!("<- engine: {line}");

        if line == "uciok" {
            let _ = ack_tx.send(Ack::UciOk);
        } else if line == "readyok" {
            let _ = ack_tx.send(Ack::ReadyOk);
        } else if line.starts_with("bestmove") {
            let Some(request) = pending.lock().take() else {
                debug!("dropping unsolicited bestmove: {line}");
                continue;
            };
            let reply = match parse_bestmove(&line) {
                Some(mv) => Ok(mv),
                None => Err(line.clone()),
            };
            if request.reply.send(reply).is_err() {
                debug!("dropping reply to withdrawn request {}", request.id);
            }
        }
        // id/option/info lines carry nothing the client consumes
    }
    warn!("engine output closed");
    alive.store(false, Ordering::Relaxed);
}
