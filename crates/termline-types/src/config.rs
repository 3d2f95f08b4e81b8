//! Engine configuration loaded from TOML.
//!
//! Every field has a default matching a small embedded console: a 128-byte
//! line, 16 arguments, 16 commands and the `CLI> ` prompt.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TermlineError};

/// Tunables for a line-editing engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Prompt emitted at start-up and after every submitted line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Line buffer capacity in bytes, terminator slot included.
    #[serde(default = "default_line_capacity")]
    pub line_capacity: usize,
    /// Maximum number of tokens handed to a command handler.
    #[serde(default = "default_max_args")]
    pub max_args: usize,
    /// Maximum number of registered commands.
    #[serde(default = "default_max_commands")]
    pub max_commands: usize,
}

fn default_prompt() -> String {
    "CLI> ".to_string()
}
fn default_line_capacity() -> usize {
    128
}
fn default_max_args() -> usize {
    16
}
fn default_max_commands() -> usize {
    16
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            line_capacity: default_line_capacity(),
            max_args: default_max_args(),
            max_commands: default_max_commands(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| TermlineError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Check the numeric limits.
    ///
    /// A line needs one editable byte plus the reserved terminator slot.
    pub fn validate(&self) -> Result<()> {
        if self.line_capacity < 2 {
            return Err(TermlineError::Config(format!(
                "line_capacity must be at least 2, got {}",
                self.line_capacity
            )));
        }
        if self.max_args == 0 {
            return Err(TermlineError::Config(
                "max_args must be at least 1".to_string(),
            ));
        }
        if self.max_commands == 0 {
            return Err(TermlineError::Config(
                "max_commands must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
