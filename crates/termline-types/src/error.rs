//! Error types for termline.

use std::io;

/// Errors produced by the termline crates.
#[derive(Debug, thiserror::Error)]
pub enum TermlineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("command table full ({capacity} entries)")]
    TableFull { capacity: usize },

    #[error("duplicate command name: {0}")]
    DuplicateName(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermlineError>;
