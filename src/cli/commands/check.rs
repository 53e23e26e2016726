//! check command - Report files without a valid header

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::header::HeaderError;
use crate::core::parse::{inspect, HeaderStatus};
use crate::core::style::supports_language;
use crate::engine::{self, Context};
use crate::ui::output::{self, Verbosity};

/// Header status of one checked file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Ok,
    Unsupported(String),
    NoHeader,
    Malformed(HeaderError),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Unsupported(id) => write!(f, "unsupported language '{}'", id),
            Status::NoHeader => write!(f, "no header"),
            Status::Malformed(err) => write!(f, "malformed header: {}", err),
        }
    }
}

/// Check each file and fail if any lacks a valid header.
pub fn check(ctx: &Context, files: &[PathBuf]) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let mut failing = 0;
    for path in files {
        match status_of(path) {
            Ok(Status::Ok) => output::print(output::format_status(path, Status::Ok), verbosity),
            Ok(status) => {
                failing += 1;
                output::print(output::format_status(path, status), verbosity);
            }
            Err(err) => {
                failing += 1;
                output::error(output::format_status(path, err));
            }
        }
    }

    if failing > 0 {
        bail!("{} of {} file(s) lack a valid header", failing, files.len());
    }
    Ok(())
}

fn status_of(path: &Path) -> Result<Status, engine::EngineError> {
    let document = engine::load_document(path, None)?;
    if !supports_language(&document.language_id) {
        return Ok(Status::Unsupported(document.language_id));
    }
    Ok(match inspect(&document.text) {
        HeaderStatus::Present(_) => Status::Ok,
        HeaderStatus::Absent => Status::NoHeader,
        HeaderStatus::Malformed(err) => Status::Malformed(err),
    })
}
