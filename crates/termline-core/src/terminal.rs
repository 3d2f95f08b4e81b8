//! Output handle given to command handlers.

use termline_platform::Transport;

use crate::printf::{Arg, write_formatted};
use crate::registry::CommandRegistry;

/// What a running command can do: write to the console and inspect the
/// command table.
pub struct Terminal<'t> {
    io: &'t mut dyn Transport,
    commands: &'t CommandRegistry<'t>,
}

impl<'t> Terminal<'t> {
    pub fn new(io: &'t mut dyn Transport, commands: &'t CommandRegistry<'t>) -> Self {
        Self { io, commands }
    }

    /// Emit one byte.
    pub fn put_char(&mut self, byte: u8) {
        self.io.write_byte(byte);
    }

    /// Emit a string.
    pub fn put_str(&mut self, s: &str) {
        self.io.write_str(s);
    }

    /// Emit formatted text. See [`write_formatted`] for the directives.
    pub fn printf(&mut self, format: &str, args: &[Arg<'_>]) {
        write_formatted(&mut *self.io, format, args);
    }

    /// The registered commands, in registration order.
    pub fn commands(&self) -> &'t CommandRegistry<'t> {
        self.commands
    }
}
