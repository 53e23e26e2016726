//! engine::document
//!
//! The document an insert or refresh operates on.

use std::path::Path;

use crate::core::style::language_for_path;

/// Line terminator used by a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect from the first line; documents without a newline use LF.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if text[..idx].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Convert LF-terminated text to this line ending.
    pub fn apply(&self, text: &str) -> String {
        match self {
            LineEnding::Lf => text.to_string(),
            LineEnding::CrLf => text.replace('\n', "\r\n"),
        }
    }
}

/// Text, language and name of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Full document text.
    pub text: String,
    /// Language identifier used to pick the comment style.
    pub language_id: String,
    /// Base name of the file.
    pub filename: String,
}

impl Document {
    pub fn new(
        text: impl Into<String>,
        language_id: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            language_id: language_id.into(),
            filename: filename.into(),
        }
    }

    /// Build a document for a file's contents.
    ///
    /// The language comes from `language_override` when given, otherwise it
    /// is detected from the path. Paths with no known language keep their
    /// extension (or file name) as the id, which the style table rejects.
    pub fn for_path(path: &Path, text: String, language_override: Option<&str>) -> Self {
        let filename = base_name(path);
        let language_id = match language_override {
            Some(id) => id.to_string(),
            None => detect_language(path),
        };
        Self {
            text,
            language_id,
            filename,
        }
    }
}

/// Base name of a path, lossily converted to UTF-8.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn detect_language(path: &Path) -> String {
    if let Some(id) = language_for_path(path) {
        return id.to_string();
    }
    path.extension()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}
