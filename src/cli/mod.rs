//! cli
//!
//! Command-line interface layer for stdheader.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that resolve the identity from configuration and call the
//! [`crate::engine`]. All file rewrites flow through the engine.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::engine;
use crate::logging;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    logging::initialize(cli.debug);

    let ctx = engine::Context {
        debug: cli.debug,
        quiet: cli.quiet,
        user: cli.user.clone(),
        email: cli.email.clone(),
    };

    commands::dispatch(cli.command, &ctx)
}
