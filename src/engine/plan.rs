//! engine::plan
//!
//! Decide what an insert or refresh does to a document.
//!
//! # Modes
//!
//! - [`Mode::Insert`]: the "insert header" command. Refreshes a valid
//!   header, replaces a malformed one with a fresh header, and inserts a
//!   fresh header into documents without one.
//! - [`Mode::Update`]: the save hook. Refreshes a valid header and leaves
//!   every other document untouched.
//!
//! Planning is pure: the plan carries the new header text and the edit that
//! applies it, and [`Edit::apply`] produces the new document text.

use chrono::NaiveDateTime;
use tracing::debug;

use super::document::{Document, LineEnding};
use crate::core::header::{HeaderError, HeaderInfo, Identity, Stamp};
use crate::core::layout::HEADER_ROWS;
use crate::core::parse::{inspect, HeaderStatus};
use crate::core::render::render_header;
use crate::core::style::supports_language;

/// Which command is planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Insert,
    Update,
}

/// A text edit at the top of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Put the header and a blank separator line above the existing text.
    Insert { header: String },
    /// Replace the first [`HEADER_ROWS`] lines with the header.
    Replace { header: String },
}

impl Edit {
    /// Apply the edit to `text`.
    ///
    /// The header (LF-terminated) is converted to `text`'s line ending.
    /// Everything after the replaced rows is kept as is.
    pub fn apply(&self, text: &str) -> String {
        let ending = LineEnding::detect(text);
        match self {
            Edit::Insert { header } => {
                let mut out = ending.apply(header);
                out.push_str(ending.as_str());
                out.push_str(text);
                out
            }
            Edit::Replace { header } => {
                let mut out = ending.apply(header);
                out.push_str(&text[header_end(text)..]);
                out
            }
        }
    }
}

/// Byte offset just past the first [`HEADER_ROWS`] lines.
fn header_end(text: &str) -> usize {
    text.split_inclusive('\n')
        .take(HEADER_ROWS)
        .map(str::len)
        .sum()
}

/// Why a document is left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// Save hook on a language without header support.
    UnsupportedLanguage(String),
    /// Save hook on a document without a header.
    NoHeader,
    /// Save hook on a document whose header does not decode.
    Malformed(HeaderError),
}

/// What to do with a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Write a header.
    Write {
        edit: Edit,
        /// The metadata the header encodes.
        info: HeaderInfo,
        /// Set when a malformed header is being replaced by a fresh one.
        replaced: Option<HeaderError>,
    },
    /// Leave the document untouched.
    Skip(Skip),
}

impl Plan {
    /// New document text, or `None` if the plan leaves it untouched.
    pub fn apply(&self, text: &str) -> Option<String> {
        match self {
            Plan::Write { edit, .. } => Some(edit.apply(text)),
            Plan::Skip(_) => None,
        }
    }
}

/// Plan an insert or refresh of `document`.
///
/// # Errors
///
/// In [`Mode::Insert`], returns [`HeaderError::UnsupportedLanguage`] for
/// languages without a comment style. [`Mode::Update`] never fails; it
/// skips instead.
pub fn plan(
    document: &Document,
    identity: &Identity,
    now: NaiveDateTime,
    mode: Mode,
) -> Result<Plan, HeaderError> {
    let language = document.language_id.as_str();
    if !supports_language(language) {
        return match mode {
            Mode::Insert => Err(HeaderError::UnsupportedLanguage(language.to_string())),
            Mode::Update => Ok(Plan::Skip(Skip::UnsupportedLanguage(language.to_string()))),
        };
    }

    let stamp = Stamp::new(document.filename.clone(), identity.clone(), now);
    let status = inspect(&document.text);
    debug!(file = %document.filename, language, ?mode, status = status_name(&status), "planning header");

    let (edit_kind, info, replaced) = match (status, mode) {
        (HeaderStatus::Present(prior), _) => (
            EditKind::Replace,
            HeaderInfo::stamp(Some(&prior), &stamp),
            None,
        ),
        (HeaderStatus::Malformed(err), Mode::Insert) => (
            EditKind::Replace,
            HeaderInfo::stamp(None, &stamp),
            Some(err),
        ),
        (HeaderStatus::Absent, Mode::Insert) => {
            (EditKind::Insert, HeaderInfo::stamp(None, &stamp), None)
        }
        (HeaderStatus::Malformed(err), Mode::Update) => {
            return Ok(Plan::Skip(Skip::Malformed(err)))
        }
        (HeaderStatus::Absent, Mode::Update) => return Ok(Plan::Skip(Skip::NoHeader)),
    };

    let header = render_header(language, &info)?;
    let edit = match edit_kind {
        EditKind::Insert => Edit::Insert { header },
        EditKind::Replace => Edit::Replace { header },
    };

    Ok(Plan::Write {
        edit,
        info,
        replaced,
    })
}

enum EditKind {
    Insert,
    Replace,
}

fn status_name(status: &HeaderStatus) -> &'static str {
    match status {
        HeaderStatus::Absent => "absent",
        HeaderStatus::Malformed(_) => "malformed",
        HeaderStatus::Present(_) => "present",
    }
}
