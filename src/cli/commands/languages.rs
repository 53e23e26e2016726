//! languages command - List supported language ids

use anyhow::Result;

use crate::core::style::supported_languages;
use crate::engine::Context;
use crate::ui::output::{self, Verbosity};

/// Print each supported language id with its comment delimiters.
pub fn languages(ctx: &Context) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let lines: Vec<String> = supported_languages()
        .map(|(id, style)| format!("{:<18} {}", id, style.describe()))
        .collect();
    output::print(output::format_list(&lines, ""), verbosity);
    Ok(())
}
