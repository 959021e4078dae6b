//! # Storefront Terminal Library
//!
//! Configures and runs the terminal storefront.
//!
//! ## Module Organization
//! ```text
//! storefront_terminal/
//! ├── lib.rs          ◄─── You are here (startup & input loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── AppConfig, DisplayConfig
//! │   └── session.rs  ◄─── Session (catalog + cart)
//! ├── commands/
//! │   ├── catalog.rs  ◄─── load_catalog, list_items
//! │   └── cart.rs     ◄─── add_to_cart, get_cart
//! ├── input.rs        ◄─── Line → Action
//! ├── render.rs       ◄─── Cards, cart list, messages
//! └── error.rs        ◄─── UiError for commands
//! ```

pub mod commands;
pub mod error;
pub mod input;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use error::UiError;
use input::Action;
use state::{AppConfig, DisplayConfig, Session};

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG)                               │
/// │  2. Load Configuration (file → env → validate)                          │
/// │  3. Fetch Catalog once (current-thread runtime)                         │
/// │       └── failure: print message, exit 1, no partial catalog            │
/// │  4. Create Session (empty cart)                                         │
/// │  5. Input loop until quit / EOF                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    info!("Starting storefront");

    let config = match AppConfig::load(None) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", UiError::from(err).message);
            return ExitCode::from(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to start runtime: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let catalog = match runtime.block_on(commands::catalog::load_catalog(&config.catalog)) {
        Ok(items) => items,
        Err(err) => {
            // Nothing useful left to do if stdout is gone
            let _ = render::error(&mut out, &err);
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(catalog);
    let stdin = io::stdin();

    match run_loop(&mut session, &config.display, stdin.lock(), &mut out) {
        Ok(()) => {
            info!(session = %session.id(), items = session.cart().len(), "Session ended");
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!(error = %err, "Terminal I/O failed");
            ExitCode::FAILURE
        }
    }
}

/// Drives the session from line-oriented input until `quit` or EOF.
///
/// Prints the catalog and the (empty) cart first, like the initial page.
pub fn run_loop<R, W>(
    session: &mut Session,
    display: &DisplayConfig,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    render::items(out, commands::catalog::list_items(session), display)?;
    writeln!(out)?;
    render::cart(out, &commands::cart::get_cart(session), display)?;
    writeln!(out, "\nType 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Action>() {
            Ok(Action::List) => render::items(out, commands::catalog::list_items(session), display)?,
            Ok(Action::Add(id)) => match commands::cart::add_to_cart(session, id) {
                Ok(summary) => render::cart(out, &summary, display)?,
                Err(err) => render::error(out, &err)?,
            },
            Ok(Action::Cart) => render::cart(out, &commands::cart::get_cart(session), display)?,
            Ok(Action::Help) => writeln!(out, "{}", render::HELP)?,
            Ok(Action::Quit) => break,
            Err(err) => render::error(out, &err)?,
        }
        out.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the storefront output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (including dropped records)
/// - Default: INFO for storefront crates, WARN for the HTTP stack
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,storefront_catalog=info,storefront_terminal=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
