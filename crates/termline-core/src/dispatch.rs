//! Command lookup and invocation.

use termline_platform::Transport;

use crate::registry::CommandRegistry;
use crate::terminal::Terminal;

/// How a submitted line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No tokens; nothing ran.
    Empty,
    /// The handler ran and succeeded.
    Ran,
    /// The handler ran and reported an error.
    Failed,
    /// No command has this name.
    Unknown(String),
}

/// Run the command named by `args[0]`.
///
/// A failing handler is reported with a fixed message; the error itself only
/// goes to the log.
pub fn dispatch(registry: &CommandRegistry<'_>, args: &[&str], io: &mut dyn Transport) -> Dispatch {
    let Some(&name) = args.first() else {
        return Dispatch::Empty;
    };

    let Some(cmd) = registry.find(name) else {
        log::debug!("unknown command {name:?}");
        io.write_str("Unknown command: ");
        io.write_str(name);
        io.write_str("\r\n");
        return Dispatch::Unknown(name.to_string());
    };

    log::debug!("dispatching {} with {} args", cmd.name(), args.len());
    let mut term = Terminal::new(io, registry);
    match cmd.execute(args, &mut term) {
        Ok(()) => Dispatch::Ran,
        Err(e) => {
            log::debug!("command {} failed: {e}", cmd.name());
            io.write_str("Command returned error\r\n");
            Dispatch::Failed
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use termline_platform::MemoryTransport;
    use termline_types::error::{Result, TermlineError};

    use crate::registry::Command;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Vec<String>>>,
    }
    impl Command for Recorder {
        fn name(&self) -> &str {
            "rec"
        }
        fn short_name(&self) -> Option<&str> {
            Some("r")
        }
        fn execute(&self, args: &[&str], term: &mut Terminal<'_>) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(args.iter().map(|s| s.to_string()).collect());
            term.put_str("ok\r\n");
            Ok(())
        }
    }

    struct Failing;
    impl Command for Failing {
        fn name(&self) -> &str {
            "fail"
        }
        fn execute(&self, _args: &[&str], _term: &mut Terminal<'_>) -> Result<()> {
            Err(TermlineError::Command("code 42".into()))
        }
    }

    #[test]
    fn runs_by_long_name_with_all_tokens() {
        let rec = Recorder::default();
        let mut reg = CommandRegistry::new(4);
        reg.register(&rec).unwrap();
        let mut io = MemoryTransport::new();

        assert_eq!(dispatch(&reg, &["rec", "a", "b c"], &mut io), Dispatch::Ran);
        assert_eq!(*rec.calls.borrow(), vec![vec!["rec", "a", "b c"]]);
        assert_eq!(io.output_str(), "ok\r\n");
    }

    #[test]
    fn runs_by_short_name() {
        let rec = Recorder::default();
        let mut reg = CommandRegistry::new(4);
        reg.register(&rec).unwrap();
        let mut io = MemoryTransport::new();

        assert_eq!(dispatch(&reg, &["r"], &mut io), Dispatch::Ran);
        assert_eq!(rec.calls.borrow()[0], vec!["r"]);
    }

    #[test]
    fn prefix_is_not_enough() {
        let rec = Recorder::default();
        let mut reg = CommandRegistry::new(4);
        reg.register(&rec).unwrap();
        let mut io = MemoryTransport::new();

        assert_eq!(
            dispatch(&reg, &["re"], &mut io),
            Dispatch::Unknown("re".to_string())
        );
        assert!(rec.calls.borrow().is_empty());
        assert_eq!(io.output_str(), "Unknown command: re\r\n");
    }

    #[test]
    fn failure_is_generic() {
        let mut reg = CommandRegistry::new(4);
        reg.register(&Failing).unwrap();
        let mut io = MemoryTransport::new();

        assert_eq!(dispatch(&reg, &["fail"], &mut io), Dispatch::Failed);
        let out = io.output_str();
        assert_eq!(out, "Command returned error\r\n");
        assert!(!out.contains("42"));
    }

    #[test]
    fn empty_args() {
        let reg = CommandRegistry::new(4);
        let mut io = MemoryTransport::new();
        assert_eq!(dispatch(&reg, &[], &mut io), Dispatch::Empty);
        assert!(io.output().is_empty());
    }
}
