//! insert and update commands - Stamp headers onto files

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use chrono::Local;
use tracing::info;

use super::resolve_identity;
use crate::core::header::{HeaderError, HeaderInfo};
use crate::core::render::overflowing_fields;
use crate::engine::{self, Action, Context, EngineError, Mode, Outcome, Request};
use crate::ui::output::{self, Verbosity};

/// Insert or refresh headers.
pub fn insert(
    ctx: &Context,
    files: &[PathBuf],
    language: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    stamp(ctx, files, language, dry_run, Mode::Insert)
}

/// Refresh existing headers only.
pub fn update(
    ctx: &Context,
    files: &[PathBuf],
    language: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    stamp(ctx, files, language, dry_run, Mode::Update)
}

fn stamp(
    ctx: &Context,
    files: &[PathBuf],
    language: Option<&str>,
    dry_run: bool,
    mode: Mode,
) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let request = Request {
        mode,
        language: language.map(str::to_string),
        identity: resolve_identity(ctx, verbosity)?,
        now: Local::now().naive_local(),
        dry_run,
    };

    let mut failures = 0;
    for path in files {
        match engine::stamp_file(path, &request) {
            Ok(outcome) => report(&outcome, verbosity)?,
            Err(EngineError::Header(HeaderError::UnsupportedLanguage(id))) => {
                output::warn(
                    output::format_status(path, format!("unsupported language '{id}', skipped")),
                    verbosity,
                );
            }
            Err(err) => {
                output::error(output::format_status(path, &err));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} file(s) could not be stamped", failures, files.len());
    }
    Ok(())
}

fn report(outcome: &Outcome, verbosity: Verbosity) -> Result<()> {
    if let Action::Recreated { reason, .. } = &outcome.action {
        output::warn(
            output::format_status(&outcome.path, format!("replacing malformed header: {reason}")),
            verbosity,
        );
    }

    if let Some(note) = outcome.action.info().and_then(truncation_note) {
        output::warn(output::format_status(&outcome.path, note), verbosity);
    }

    match (&outcome.text, outcome.written) {
        (Some(text), false) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
        (Some(_), true) => output::success(
            output::format_status(&outcome.path, outcome.action.describe()),
            verbosity,
        ),
        (None, _) => {
            info!(path = %outcome.path.display(), "{}", outcome.action.describe());
            if let Action::Skipped(engine::Skip::Malformed(err)) = &outcome.action {
                output::warn(
                    output::format_status(&outcome.path, format!("malformed header left untouched: {err}")),
                    verbosity,
                );
            }
        }
    }
    Ok(())
}

/// Warning text for fields cut to fit their span, if any.
fn truncation_note(info: &HeaderInfo) -> Option<String> {
    let fields: Vec<&str> = overflowing_fields(info).into_iter().map(|f| f.name()).collect();
    if fields.is_empty() {
        return None;
    }
    Some(format!("truncated to fit the header: {}", fields.join(", ")))
}
