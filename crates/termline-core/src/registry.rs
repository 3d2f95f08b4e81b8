//! Command trait and the capacity-bounded command table.
//!
//! The registry stores borrowed trait objects in registration order. It never
//! owns a command, so every descriptor must outlive the registry. There is no
//! removal: commands are registered once, before the input loop starts.

use termline_types::error::{Result, TermlineError};

use crate::terminal::Terminal;

/// A single executable command.
pub trait Command {
    /// The long name (what the user types).
    fn name(&self) -> &str;

    /// Optional short alias, e.g. `h` for `help`.
    fn short_name(&self) -> Option<&str> {
        None
    }

    /// One-line description for `help`.
    fn help(&self) -> &str {
        ""
    }

    /// Run the command. `args[0]` is the name the user typed.
    ///
    /// An error is reported to the user as a generic failure; its detail only
    /// reaches the log.
    fn execute(&self, args: &[&str], term: &mut Terminal<'_>) -> Result<()>;
}

/// A command selected by lookup, with the name that matched.
#[derive(Clone, Copy)]
pub struct CommandMatch<'a> {
    pub command: &'a dyn Command,
    /// The long name, or the short name if only that one matched.
    pub name: &'a str,
}

impl std::fmt::Debug for CommandMatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandMatch")
            .field("command", &self.command.name())
            .field("name", &self.name)
            .finish()
    }
}

/// Ordered table of registered commands.
pub struct CommandRegistry<'a> {
    commands: Vec<&'a dyn Command>,
    capacity: usize,
}

impl<'a> CommandRegistry<'a> {
    /// Create an empty registry holding at most `capacity` commands.
    pub fn new(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a command.
    ///
    /// Only long names are checked for duplicates. A short name that repeats
    /// an earlier one is accepted, and lookups resolve to the earlier entry.
    pub fn register(&mut self, cmd: &'a dyn Command) -> Result<()> {
        let name = cmd.name();
        if !is_valid_name(name) {
            log::warn!("rejected command with invalid name {name:?}");
            return Err(TermlineError::InvalidArgument(format!(
                "invalid command name {name:?}"
            )));
        }
        if let Some(short) = cmd.short_name()
            && !is_valid_name(short)
        {
            log::warn!("rejected command {name}: invalid short name {short:?}");
            return Err(TermlineError::InvalidArgument(format!(
                "invalid short name {short:?} for {name}"
            )));
        }
        if self.commands.len() >= self.capacity {
            log::warn!("rejected command {name}: table full");
            return Err(TermlineError::TableFull {
                capacity: self.capacity,
            });
        }
        if self.commands.iter().any(|c| c.name() == name) {
            log::warn!("rejected command {name}: duplicate name");
            return Err(TermlineError::DuplicateName(name.to_string()));
        }

        self.commands.push(cmd);
        log::debug!("registered command {name} ({}/{})", self.len(), self.capacity);
        Ok(())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Maximum number of commands.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The command at `index` in registration order.
    pub fn get(&self, index: usize) -> Option<&'a dyn Command> {
        self.commands.get(index).copied()
    }

    /// All commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Command> + '_ {
        self.commands.iter().copied()
    }

    /// Exact lookup against long and short names. First registered wins.
    pub fn find(&self, name: &str) -> Option<&'a dyn Command> {
        self.iter()
            .find(|c| c.name() == name || c.short_name() == Some(name))
    }

    /// Every command with a name starting with `prefix`, in registration order.
    ///
    /// The long name is tried first; the short name only counts when the long
    /// name does not match.
    pub fn matches(&self, prefix: &str) -> Vec<CommandMatch<'a>> {
        self.iter()
            .filter_map(|command| {
                let name = if command.name().starts_with(prefix) {
                    command.name()
                } else {
                    command.short_name().filter(|s| s.starts_with(prefix))?
                };
                Some(CommandMatch { command, name })
            })
            .collect()
    }
}

/// Names must be typeable on the line: non-empty printable ASCII, no blanks.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_graphic())
}
