//! Host terminal transport.
//!
//! Puts the controlling terminal into raw mode so every key arrives as soon
//! as it is pressed, without local echo. Stdin is drained by a reader thread
//! into a channel, which turns the blocking `read` into a non-blocking poll.

use std::io::{self, BufWriter, Read, Stdout, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use termline_types::error::{Result, TermlineError};

use crate::Transport;

/// Raw-mode stdin/stdout transport. Cooked mode is restored on drop.
pub struct StdioTransport {
    rx: Receiver<u8>,
    out: BufWriter<Stdout>,
    closed: bool,
}

impl StdioTransport {
    /// Enter raw mode and start the stdin reader thread.
    pub fn new() -> Result<Self> {
        crossterm::terminal::enable_raw_mode()
            .map_err(|e| TermlineError::Platform(format!("cannot enter raw mode: {e}")))?;

        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("termline-stdin".to_string())
            .spawn(move || {
                let mut stdin = io::stdin().lock();
                let mut buf = [0u8; 64];
                loop {
                    match stdin.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            for &b in &buf[..n] {
                                if tx.send(b).is_err() {
                                    return;
                                }
                            }
                        },
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => {
                            log::warn!("stdin read failed: {e}");
                            break;
                        },
                    }
                }
                log::debug!("stdin reader finished");
            });

        if let Err(e) = spawned {
            let _ = crossterm::terminal::disable_raw_mode();
            return Err(e.into());
        }

        log::debug!("raw mode enabled");
        Ok(Self {
            rx,
            out: BufWriter::new(io::stdout()),
            closed: false,
        })
    }

    /// Whether stdin has reached end of stream and every byte was consumed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Transport for StdioTransport {
    fn read_byte(&mut self) -> Option<u8> {
        match self.rx.try_recv() {
            Ok(b) => Some(b),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.closed = true;
                None
            },
        }
    }

    fn write_byte(&mut self, byte: u8) {
        if let Err(e) = self.out.write_all(&[byte]) {
            log::warn!("stdout write failed: {e}");
        }
    }

    fn write_str(&mut self, s: &str) {
        if let Err(e) = self.out.write_all(s.as_bytes()) {
            log::warn!("stdout write failed: {e}");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("stdout flush failed: {e}");
        }
    }
}

impl Drop for StdioTransport {
    fn drop(&mut self) {
        let _ = self.out.flush();
        if let Err(e) = crossterm::terminal::disable_raw_mode() {
            log::warn!("cannot restore terminal mode: {e}");
        }
    }
}
