//! config command - Get, set, or list configuration values

use anyhow::{Context as _, Result};

use crate::core::config::{Config, GlobalConfig};
use crate::engine::Context;
use crate::ui::output::{self, Verbosity};

use super::load_config;

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = load_config(Verbosity::from_flags(ctx.quiet, ctx.debug))?;

    // A key without a value prints nothing
    if let Some(value) = config.global.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let config = load_config(verbosity)?;

    let mut global = config.global.clone();
    global.set(key, value)?;

    let path = config.write_target()?;
    Config::write(&path, &global).context("Failed to write config")?;

    output::success(format!("Set {} = {}", key, value), verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = load_config(Verbosity::from_flags(ctx.quiet, ctx.debug))?;

    match config.loaded_from() {
        Some(path) => println!("# {}", output::format_path(path)),
        None => println!("# (no config file)"),
    }
    for key in GlobalConfig::KEYS {
        let value = config.global.get(key)?.unwrap_or("(not set)");
        println!("{} = {}", key, value);
    }
    Ok(())
}
