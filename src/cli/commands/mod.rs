//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Resolves configuration and calls the engine
//! 3. Formats and displays output
//!
//! Handlers do NOT rewrite files directly.

mod check;
mod completion;
mod config_cmd;
mod languages;
mod show;
mod stamp;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use languages::languages;
pub use show::show;
pub use stamp::{insert, update};

use crate::cli::args::{Command, ConfigAction};
use crate::core::config::Config;
use crate::core::header::Identity;
use crate::engine::Context;
use crate::ui::output::{self, Verbosity};
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Insert {
            files,
            language,
            dry_run,
        } => stamp::insert(ctx, &files, language.as_deref(), dry_run),
        Command::Update {
            files,
            language,
            dry_run,
        } => stamp::update(ctx, &files, language.as_deref(), dry_run),
        Command::Show { file, json } => show::show(&file, json),
        Command::Check { files } => check::check(ctx, &files),
        Command::Languages => languages::languages(ctx),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load configuration, surfacing load warnings.
fn load_config(verbosity: Verbosity) -> Result<Config> {
    let result = Config::load().context("Failed to load config")?;
    for warning in &result.warnings {
        output::warn(
            format!("{} ({})", warning.message, output::format_path(&warning.path)),
            verbosity,
        );
    }
    Ok(result.config)
}

/// Resolve the identity that signs headers.
fn resolve_identity(ctx: &Context, verbosity: Verbosity) -> Result<Identity> {
    let config = load_config(verbosity)?;
    let identity = config
        .identity(ctx.user.as_deref(), ctx.email.as_deref())
        .context("Invalid identity")?;
    Ok(identity)
}
