//! engine
//!
//! Stamp headers onto files: Load -> Plan -> Write.
//!
//! # Architecture
//!
//! The engine sits between the CLI and the pure header format in
//! [`crate::core`]:
//!
//! 1. **Load**: lock the file and read it as a [`Document`]
//! 2. **Plan**: decide the edit with [`plan::plan`]
//! 3. **Write**: apply the edit through the held lock (skipped on dry runs)
//!
//! The engine never resolves configuration. Callers pass a complete
//! [`Identity`] and the current time in a [`Request`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chrono::Local;
//! use stdheader::core::header::Identity;
//! use stdheader::engine::{stamp_file, Mode, Request};
//!
//! let request = Request {
//!     mode: Mode::Update,
//!     language: None,
//!     identity: Identity::new("jdoe", "jdoe@student.42.fr"),
//!     now: Local::now().naive_local(),
//!     dry_run: false,
//! };
//! let outcome = stamp_file(Path::new("main.c"), &request)?;
//! println!("{}", outcome.action.describe());
//! # Ok::<(), stdheader::engine::EngineError>(())
//! ```

pub mod document;
pub mod lock;
pub mod plan;

pub use document::{Document, LineEnding};
pub use lock::{DocumentLock, LockError};
pub use plan::{Edit, Mode, Plan, Skip};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::core::header::{HeaderError, HeaderInfo, Identity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// User name override.
    pub user: Option<String>,
    /// Email override.
    pub email: Option<String>,
}

/// Errors from engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{0}' is not valid UTF-8")]
    NotUtf8(PathBuf),

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One insert or refresh request.
#[derive(Debug, Clone)]
pub struct Request {
    pub mode: Mode,
    /// Language id overriding detection from the path.
    pub language: Option<String>,
    pub identity: Identity,
    pub now: NaiveDateTime,
    /// Plan and return the new text without writing it.
    pub dry_run: bool,
}

/// What happened to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fresh header was put above the existing text.
    Inserted(HeaderInfo),
    /// An existing header was refreshed.
    Refreshed(HeaderInfo),
    /// A malformed header was replaced with a fresh one.
    Recreated { info: HeaderInfo, reason: HeaderError },
    /// The file was left untouched.
    Skipped(Skip),
}

impl Action {
    /// Short human-readable summary.
    pub fn describe(&self) -> String {
        match self {
            Action::Inserted(_) => "inserted header".to_string(),
            Action::Refreshed(_) => "refreshed header".to_string(),
            Action::Recreated { reason, .. } => format!("replaced malformed header ({reason})"),
            Action::Skipped(Skip::UnsupportedLanguage(id)) => {
                format!("skipped: unsupported language '{id}'")
            }
            Action::Skipped(Skip::NoHeader) => "skipped: no header".to_string(),
            Action::Skipped(Skip::Malformed(err)) => format!("skipped: {err}"),
        }
    }

    /// The header metadata written, if any.
    pub fn info(&self) -> Option<&HeaderInfo> {
        match self {
            Action::Inserted(info) | Action::Refreshed(info) => Some(info),
            Action::Recreated { info, .. } => Some(info),
            Action::Skipped(_) => None,
        }
    }
}

/// Result of [`stamp_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub path: PathBuf,
    pub action: Action,
    /// The new document text, when the action changes the file.
    pub text: Option<String>,
    /// Whether `text` was written to disk.
    pub written: bool,
}

/// Read a file as a [`Document`] without locking it.
pub fn load_document(path: &Path, language: Option<&str>) -> Result<Document, EngineError> {
    let bytes = fs::read(path).map_err(|source| EngineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode(path, bytes)?;
    Ok(Document::for_path(path, text, language))
}

/// Insert or refresh the header of one file.
///
/// The file stays locked from the read until the rewrite is synced. Dry
/// runs read without locking and never write.
///
/// # Errors
///
/// - [`EngineError::Lock`] if the file cannot be opened or is locked
/// - [`EngineError::Header`] for unsupported languages in [`Mode::Insert`]
/// - [`EngineError::Read`], [`EngineError::NotUtf8`], [`EngineError::Write`]
///   for I/O failures
pub fn stamp_file(path: &Path, request: &Request) -> Result<Outcome, EngineError> {
    if request.dry_run {
        let document = load_document(path, request.language.as_deref())?;
        let (action, text) = decide(&document, request)?;
        return Ok(Outcome {
            path: path.to_path_buf(),
            action,
            text,
            written: false,
        });
    }

    let mut lock = DocumentLock::acquire(path)?;
    let bytes = lock.read_bytes().map_err(|source| EngineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = Document::for_path(path, decode(path, bytes)?, request.language.as_deref());
    let (action, text) = decide(&document, request)?;

    let written = match &text {
        Some(text) => {
            lock.replace_contents(text)
                .map_err(|source| EngineError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
            true
        }
        None => false,
    };
    lock.release()?;

    debug!(path = %path.display(), written, "{}", action.describe());
    Ok(Outcome {
        path: path.to_path_buf(),
        action,
        text,
        written,
    })
}

fn decide(document: &Document, request: &Request) -> Result<(Action, Option<String>), EngineError> {
    let plan = plan::plan(document, &request.identity, request.now, request.mode)?;
    let text = plan.apply(&document.text);

    let action = match plan {
        Plan::Write {
            edit: Edit::Insert { .. },
            info,
            ..
        } => Action::Inserted(info),
        Plan::Write {
            info,
            replaced: Some(reason),
            ..
        } => {
            warn!(file = %document.filename, error = %reason, "replacing malformed header");
            Action::Recreated { info, reason }
        }
        Plan::Write { info, .. } => Action::Refreshed(info),
        Plan::Skip(skip) => {
            if let Skip::Malformed(err) = &skip {
                warn!(file = %document.filename, error = %err, "leaving malformed header untouched");
            }
            Action::Skipped(skip)
        }
    };

    Ok((action, text))
}

fn decode(path: &Path, bytes: Vec<u8>) -> Result<String, EngineError> {
    String::from_utf8(bytes).map_err(|_| EngineError::NotUtf8(path.to_path_buf()))
}
