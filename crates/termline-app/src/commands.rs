//! Demo command set for the interactive console.

use termline_core::{Command, Engine, Terminal, Transport, printf};
use termline_types::error::Result;

/// Register the demo commands, in the order `help` lists them.
pub fn register_demo_commands<T: Transport>(engine: &mut Engine<'_, T>) -> Result<()> {
    let commands: [&'static dyn Command; 5] = [&HelpCmd, &EchoCmd, &ClearCmd, &VersionCmd, &LedCmd];
    for cmd in commands {
        engine.register(cmd)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn short_name(&self) -> Option<&str> {
        Some("h")
    }
    fn help(&self) -> &str {
        "Show this help message"
    }
    fn execute(&self, _args: &[&str], term: &mut Terminal<'_>) -> Result<()> {
        let registry = term.commands();
        term.put_str("\r\nAvailable commands:\r\n");
        for cmd in registry.iter() {
            term.put_str("  ");
            term.put_str(cmd.name());
            if let Some(short) = cmd.short_name() {
                printf!(term, " (%s)", short);
            }
            printf!(term, " - %s\r\n", cmd.help());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn short_name(&self) -> Option<&str> {
        Some("e")
    }
    fn help(&self) -> &str {
        "Echo the arguments"
    }
    fn execute(&self, args: &[&str], term: &mut Terminal<'_>) -> Result<()> {
        for (i, arg) in args.iter().skip(1).enumerate() {
            if i > 0 {
                term.put_char(b' ');
            }
            term.put_str(arg);
        }
        term.put_str("\r\n");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn short_name(&self) -> Option<&str> {
        Some("c")
    }
    fn help(&self) -> &str {
        "Clear the screen"
    }
    fn execute(&self, _args: &[&str], term: &mut Terminal<'_>) -> Result<()> {
        term.put_str("\x1b[2J\x1b[H");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

struct VersionCmd;
impl Command for VersionCmd {
    fn name(&self) -> &str {
        "version"
    }
    fn short_name(&self) -> Option<&str> {
        Some("v")
    }
    fn help(&self) -> &str {
        "Show version information"
    }
    fn execute(&self, _args: &[&str], term: &mut Terminal<'_>) -> Result<()> {
        printf!(term, "termline version %s\r\n", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// led
// ---------------------------------------------------------------------------

struct LedCmd;
impl Command for LedCmd {
    fn name(&self) -> &str {
        "led"
    }
    fn short_name(&self) -> Option<&str> {
        Some("l")
    }
    fn help(&self) -> &str {
        "Control and change the state of an LED light"
    }
    fn execute(&self, args: &[&str], term: &mut Terminal<'_>) -> Result<()> {
        match args {
            [_, led, state, ..] => printf!(term, "LED %s %s\r\n", *led, *state),
            _ => term.put_str("Incomplete parameter.\r\n"),
        }
        Ok(())
    }
}
