//! termline demo console.
//!
//! Puts the terminal in raw mode and runs the line editor with a small demo
//! command set. Type `help` for the list; Tab completes command names.
//! Ctrl-C or Ctrl-D quits.

mod commands;
mod session;

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use session::Session;
use termline_core::{Engine, EngineConfig, Transport};
use termline_platform::StdioTransport;

/// How long to sleep when no input is waiting.
const IDLE_POLL: Duration = Duration::from_millis(5);

fn main() -> Result<()> {
    // Logs go to stderr, which shares the screen with the session, so keep
    // them quiet unless asked for.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Resolve config from CLI arg, TERMLINE_CONFIG env var, or defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMLINE_CONFIG").ok());
    let config = match config_path {
        Some(path) => EngineConfig::load(Path::new(&path))
            .with_context(|| format!("loading config {path}"))?,
        None => EngineConfig::default(),
    };
    log::info!(
        "Starting termline (line {} bytes, {} args, {} commands)",
        config.line_capacity,
        config.max_args,
        config.max_commands,
    );

    let mut io = StdioTransport::new().context("initialising terminal")?;
    io.write_str("termline demo. Ctrl-C to quit.\r\n");

    let mut engine = Engine::new(Session::new(io), config)?;
    if let Err(e) = commands::register_demo_commands(&mut engine) {
        log::warn!("demo commands not fully registered: {e}");
    }

    loop {
        if engine.tick() {
            continue;
        }
        let session = engine.transport();
        if session.quit_requested() || session.inner().is_closed() {
            break;
        }
        thread::sleep(IDLE_POLL);
    }

    let mut session = engine.into_transport();
    session.write_str("\r\n");
    session.flush();
    log::info!("termline session ended");
    Ok(())
}
