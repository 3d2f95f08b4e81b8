//! The byte-driven engine.
//!
//! One [`Engine`] owns everything a console session needs: the command
//! table, the line, the escape-sequence state and the transport. Each call to
//! [`Engine::process_byte`] runs to completion, output included, and never
//! waits for input.

use termline_platform::Transport;
use termline_types::config::EngineConfig;
use termline_types::error::Result;

use crate::completion::{self, Completion};
use crate::dispatch::{self, Dispatch};
use crate::input::{InputDecoder, InputState, Key};
use crate::line::LineBuffer;
use crate::parser::tokenize;
use crate::registry::{Command, CommandRegistry};

/// Line editor and command dispatcher over a byte transport.
pub struct Engine<'a, T: Transport> {
    config: EngineConfig,
    registry: CommandRegistry<'a>,
    line: LineBuffer,
    input: InputDecoder,
    io: T,
}

impl<'a, T: Transport> Engine<'a, T> {
    /// Validate `config`, take over `io` and print the first prompt.
    pub fn new(io: T, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = Self {
            registry: CommandRegistry::new(config.max_commands),
            line: LineBuffer::new(config.line_capacity),
            input: InputDecoder::new(),
            io,
            config,
        };
        log::debug!(
            "engine ready: line {} bytes, {} args, {} commands",
            engine.config.line_capacity,
            engine.config.max_args,
            engine.config.max_commands,
        );
        engine.io.write_str(&engine.config.prompt);
        engine.io.flush();
        Ok(engine)
    }

    /// Add a command to the table. See [`CommandRegistry::register`].
    pub fn register(&mut self, cmd: &'a dyn Command) -> Result<()> {
        self.registry.register(cmd)
    }

    pub fn registry(&self) -> &CommandRegistry<'a> {
        &self.registry
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn input_state(&self) -> InputState {
        self.input.state()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.io
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Give the transport back, ending the session.
    pub fn into_transport(self) -> T {
        self.io
    }

    /// Poll the transport once and process the byte, if there is one.
    ///
    /// Returns whether a byte was processed. Meant to be called from the
    /// host's main loop or scheduler tick.
    pub fn tick(&mut self) -> bool {
        match self.io.read_byte() {
            Some(byte) => {
                self.process_byte(byte);
                true
            },
            None => false,
        }
    }

    /// Feed one input byte through the decoder and apply the resulting key.
    pub fn process_byte(&mut self, byte: u8) {
        log::trace!("byte {byte:#04x} in {:?}", self.input.state());
        if let Some(key) = self.input.feed(byte) {
            self.apply(key);
        }
        self.io.flush();
    }

    /// Reprint the prompt and the current line on a fresh row.
    pub fn redraw(&mut self) {
        self.io.write_str("\r\n");
        self.line.redraw(&self.config.prompt, &mut self.io);
        self.io.flush();
    }

    fn apply(&mut self, key: Key) {
        match key {
            Key::Char(b) => {
                self.line.insert(b, &mut self.io);
            },
            Key::Backspace => {
                self.line.delete_back(&mut self.io);
            },
            Key::Left => {
                self.line.move_left(&mut self.io);
            },
            Key::Right => {
                self.line.move_right(&mut self.io);
            },
            // No history.
            Key::Up | Key::Down => {},
            Key::Tab => {
                let outcome = self.complete();
                log::trace!("tab: {outcome:?}");
            },
            Key::Enter => {
                let outcome = self.submit();
                log::trace!("submit: {outcome:?}");
            },
        }
    }

    fn complete(&mut self) -> Completion {
        completion::complete(
            &mut self.line,
            &self.registry,
            &self.config.prompt,
            &mut self.io,
        )
    }

    fn submit(&mut self) -> Dispatch {
        self.io.write_str("\r\n");

        let text = self.line.as_str().to_owned();
        let tokens = tokenize(&text, self.config.max_args);
        let args: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let outcome = dispatch::dispatch(&self.registry, &args, &mut self.io);

        self.line.clear();
        self.io.write_str(&self.config.prompt);
        outcome
    }
}
