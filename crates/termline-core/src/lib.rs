//! Line editing and command dispatch engine.
//!
//! The [`Engine`] consumes raw input bytes one at a time. Printable bytes and
//! editing keys update a fixed-capacity [`LineBuffer`], Tab completes command
//! names from the [`CommandRegistry`], and Enter tokenizes the line and
//! dispatches it to the matching [`Command`].

pub mod completion;
pub mod dispatch;
mod engine;
pub mod input;
pub mod line;
pub mod parser;
pub mod printf;
mod registry;
mod terminal;

/// The byte-driven editing and dispatch engine.
pub use engine::Engine;
/// Decoded key and escape-sequence state.
pub use input::{InputDecoder, InputState, Key};
/// Fixed-capacity editable line.
pub use line::LineBuffer;
/// Closed-set formatter argument.
pub use printf::Arg;
/// A single executable command.
pub use registry::Command;
/// A registry entry selected by name or prefix.
pub use registry::CommandMatch;
/// Ordered, capacity-bounded table of commands.
pub use registry::CommandRegistry;
/// Output handle passed to command handlers.
pub use terminal::Terminal;

pub use termline_platform::{MemoryTransport, Transport};
pub use termline_types::config::EngineConfig;
pub use termline_types::error::{Result, TermlineError};

/// Audible bell, the only signal for a refused edit.
pub const BELL: u8 = 0x07;
/// Backspace, moves the terminal cursor one column left.
pub const BACKSPACE: u8 = 0x08;
