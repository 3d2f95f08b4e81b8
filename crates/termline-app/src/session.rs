//! Session control keys for the demo console.

use termline_core::Transport;

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

/// Wraps a transport and swallows Ctrl-C / Ctrl-D, recording a quit request
/// instead of passing the byte to the engine.
pub struct Session<T> {
    inner: T,
    quit: bool,
}

impl<T: Transport> Session<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, quit: false }
    }

    /// Whether the user asked to end the session.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Transport> Transport for Session<T> {
    fn read_byte(&mut self) -> Option<u8> {
        if self.quit {
            return None;
        }
        match self.inner.read_byte()? {
            CTRL_C | CTRL_D => {
                log::debug!("quit key received");
                self.quit = true;
                None
            },
            b => Some(b),
        }
    }

    fn write_byte(&mut self, byte: u8) {
        self.inner.write_byte(byte);
    }

    fn write_str(&mut self, s: &str) {
        self.inner.write_str(s);
    }

    fn flush(&mut self) {
        self.inner.flush();
    }
}
