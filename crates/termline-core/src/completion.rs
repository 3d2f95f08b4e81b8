//! Tab completion of command names.
//!
//! Only the first word can be completed, so completion is refused as soon as
//! the line holds a blank. The whole line is the prefix, wherever the cursor
//! sits. One match is appended and the cursor moved to its end; several are
//! listed under the line, which is then redrawn untouched.

use termline_platform::Transport;

use crate::BELL;
use crate::line::LineBuffer;
use crate::registry::CommandRegistry;

/// What a Tab press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The line already holds more than one word.
    Refused,
    /// No command starts with the prefix.
    NoMatch,
    /// The single match was completed in place.
    Completed(String),
    /// The prefix already is the full name of the single match.
    AlreadyComplete,
    /// The single match would not fit in the line.
    Overflow,
    /// Several commands matched and were listed.
    Listed(usize),
}

/// Complete the line against the registry, writing the visible effect.
pub fn complete(
    line: &mut LineBuffer,
    registry: &CommandRegistry<'_>,
    prompt: &str,
    out: &mut dyn Transport,
) -> Completion {
    if line.as_bytes().iter().any(|&b| b == b' ' || b == b'\t') {
        out.write_byte(BELL);
        return Completion::Refused;
    }

    let prefix = line.as_str();
    let matches = registry.matches(prefix);

    match matches.as_slice() {
        [] => {
            out.write_byte(BELL);
            Completion::NoMatch
        },
        [only] => {
            let name = only.name;
            let Some(suffix) = name.strip_prefix(prefix).filter(|s| !s.is_empty()) else {
                return Completion::AlreadyComplete;
            };
            if !line.append(suffix.as_bytes()) {
                log::debug!("completion of {name} does not fit");
                out.write_byte(BELL);
                return Completion::Overflow;
            }
            log::debug!("completed to {name}");
            out.write_byte(b'\r');
            line.redraw(prompt, out);
            Completion::Completed(name.to_string())
        },
        several => {
            log::debug!("{} candidates for {prefix:?}", several.len());
            out.write_str("\r\n");
            for m in several {
                out.write_str("  ");
                out.write_str(m.command.name());
                if let Some(short) = m.command.short_name() {
                    out.write_str(" (");
                    out.write_str(short);
                    out.write_str(")");
                }
                out.write_str("\r\n");
            }
            line.redraw(prompt, out);
            Completion::Listed(several.len())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termline_platform::MemoryTransport;
    use termline_types::error::Result;

    use crate::registry::Command;
    use crate::terminal::Terminal;

    struct Named(&'static str, Option<&'static str>);
    impl Command for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn short_name(&self) -> Option<&str> {
            self.1
        }
        fn execute(&self, _args: &[&str], _term: &mut Terminal<'_>) -> Result<()> {
            Ok(())
        }
    }

    const HELP: Named = Named("help", Some("h"));
    const ECHO: Named = Named("echo", Some("e"));
    const EXIT: Named = Named("exit", Some("x"));

    fn line_with(text: &str, capacity: usize) -> LineBuffer {
        let mut line = LineBuffer::new(capacity);
        assert!(line.splice(text.as_bytes()));
        line
    }

    fn registry(cmds: &[&'static Named]) -> CommandRegistry<'static> {
        let mut reg = CommandRegistry::new(8);
        for &c in cmds {
            reg.register(c).unwrap();
        }
        reg
    }

    #[test]
    fn unique_match_completes() {
        let reg = registry(&[&HELP, &ECHO]);
        let mut line = line_with("he", 32);
        let mut out = MemoryTransport::new();

        let r = complete(&mut line, &reg, "CLI> ", &mut out);
        assert_eq!(r, Completion::Completed("help".to_string()));
        assert_eq!(line.as_str(), "help");
        assert_eq!(line.pos(), 4);
        assert_eq!(out.output_str(), "\rCLI> help");
    }

    #[test]
    fn completes_with_cursor_inside_word() {
        let reg = registry(&[&HELP, &ECHO]);
        for steps in 1..=2 {
            let mut line = line_with("he", 32);
            let mut out = MemoryTransport::new();
            for _ in 0..steps {
                line.move_left(&mut out);
            }
            out.take_output();

            let r = complete(&mut line, &reg, "CLI> ", &mut out);
            assert_eq!(r, Completion::Completed("help".to_string()));
            assert_eq!(line.as_str(), "help");
            assert_eq!(line.pos(), 4);
            assert_eq!(out.output_str(), "\rCLI> help");
        }
    }

    #[test]
    fn completion_is_idempotent() {
        let reg = registry(&[&HELP, &ECHO]);
        let mut line = line_with("he", 32);
        let mut out = MemoryTransport::new();
        complete(&mut line, &reg, "CLI> ", &mut out);
        out.take_output();

        let r = complete(&mut line, &reg, "CLI> ", &mut out);
        assert_eq!(r, Completion::AlreadyComplete);
        assert_eq!(line.as_str(), "help");
        assert_eq!(line.pos(), 4);
        assert!(out.output().is_empty());
    }

    #[test]
    fn single_letter_uses_long_name() {
        let reg = registry(&[&HELP, &ECHO]);
        let mut line = line_with("e", 32);
        let mut out = MemoryTransport::new();
        let r = complete(&mut line, &reg, "> ", &mut out);
        assert_eq!(r, Completion::Completed("echo".to_string()));
        assert_eq!(line.as_str(), "echo");
    }

    #[test]
    fn short_name_only_match() {
        const QUIT: Named = Named("exit", Some("quit"));
        let reg = registry(&[&HELP, &QUIT]);
        let mut line = line_with("qu", 32);
        let mut out = MemoryTransport::new();
        let r = complete(&mut line, &reg, "> ", &mut out);
        assert_eq!(r, Completion::Completed("quit".to_string()));
        assert_eq!(line.as_str(), "quit");
    }

    #[test]
    fn ambiguous_lists_and_preserves_line() {
        let reg = registry(&[&HELP, &ECHO, &EXIT]);
        let mut line = line_with("e", 32);
        let mut out = MemoryTransport::new();

        let r = complete(&mut line, &reg, "CLI> ", &mut out);
        assert_eq!(r, Completion::Listed(2));
        assert_eq!(line.as_str(), "e");
        assert_eq!(line.pos(), 1);
        assert_eq!(
            out.output_str(),
            "\r\n  echo (e)\r\n  exit (x)\r\nCLI> e"
        );
    }

    #[test]
    fn listing_omits_missing_short_name() {
        const LS: Named = Named("ls", None);
        const LED: Named = Named("led", None);
        let reg = registry(&[&LS, &LED]);
        let mut line = line_with("l", 32);
        let mut out = MemoryTransport::new();
        complete(&mut line, &reg, "> ", &mut out);
        assert_eq!(out.output_str(), "\r\n  ls\r\n  led\r\n> l");
    }

    #[test]
    fn empty_line_lists_everything() {
        let reg = registry(&[&HELP, &ECHO]);
        let mut line = LineBuffer::new(32);
        let mut out = MemoryTransport::new();
        assert_eq!(complete(&mut line, &reg, "> ", &mut out), Completion::Listed(2));
        assert!(line.is_empty());
    }

    #[test]
    fn no_match_rings_bell() {
        let reg = registry(&[&HELP, &ECHO]);
        let mut line = line_with("zz", 32);
        let mut out = MemoryTransport::new();
        assert_eq!(complete(&mut line, &reg, "> ", &mut out), Completion::NoMatch);
        assert_eq!(out.output(), &[BELL]);
        assert_eq!(line.as_str(), "zz");
    }

    #[test]
    fn blank_in_line_refuses() {
        let reg = registry(&[&HELP, &ECHO]);
        for text in ["he ", "echo x", " "] {
            let mut line = line_with(text, 32);
            let mut out = MemoryTransport::new();
            assert_eq!(complete(&mut line, &reg, "> ", &mut out), Completion::Refused);
            assert_eq!(out.output(), &[BELL]);
            assert_eq!(line.as_str(), text);
        }
    }

    #[test]
    fn space_refuses_even_with_empty_registry() {
        let reg = CommandRegistry::new(1);
        let mut line = line_with("a b", 32);
        let mut out = MemoryTransport::new();
        assert_eq!(complete(&mut line, &reg, "> ", &mut out), Completion::Refused);
        assert_eq!(out.output(), &[BELL]);
    }

    #[test]
    fn overflow_rings_bell_and_keeps_line() {
        let reg = registry(&[&HELP]);
        // Capacity 4 leaves room for 3 bytes; "help" needs 4.
        let mut line = line_with("he", 4);
        let mut out = MemoryTransport::new();
        assert_eq!(complete(&mut line, &reg, "> ", &mut out), Completion::Overflow);
        assert_eq!(out.output(), &[BELL]);
        assert_eq!(line.as_str(), "he");
    }

    #[test]
    fn overflow_keeps_cursor_inside_word() {
        let reg = registry(&[&HELP]);
        let mut line = line_with("he", 4);
        let mut out = MemoryTransport::new();
        line.move_left(&mut out);
        out.take_output();
        assert_eq!(complete(&mut line, &reg, "> ", &mut out), Completion::Overflow);
        assert_eq!(out.output(), &[BELL]);
        assert_eq!(line.as_str(), "he");
        assert_eq!(line.pos(), 1);
    }

    #[test]
    fn exact_fit_completes() {
        let reg = registry(&[&HELP]);
        let mut line = line_with("h", 5);
        let mut out = MemoryTransport::new();
        assert_eq!(
            complete(&mut line, &reg, "> ", &mut out),
            Completion::Completed("help".to_string())
        );
        assert!(line.is_full());
    }
}
