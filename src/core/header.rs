//! core::header
//!
//! Header metadata value types.
//!
//! # Types
//!
//! - [`HeaderInfo`] - Decoded contents of a header block
//! - [`Author`] - `user <email>` as written on the `By:` row
//! - [`Identity`] - Fully resolved operator identity
//! - [`Stamp`] - Fresh values for one insert/refresh operation
//! - [`HeaderError`] - Unsupported language or malformed field
//!
//! # Merging
//!
//! [`HeaderInfo::stamp`] combines a previously decoded header (if any) with
//! the fresh values of the current operation. Creation fields come from the
//! prior header when there is one; everything else comes from the stamp.
//!
//! ```
//! use chrono::NaiveDate;
//! use stdheader::core::header::{HeaderInfo, Identity, Stamp};
//!
//! let at = |d, h| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
//! let jdoe = Identity::new("jdoe", "jdoe@student.42.fr");
//!
//! let created = HeaderInfo::stamp(None, &Stamp::new("main.c", jdoe.clone(), at(10, 9)));
//! assert_eq!(created.created_at, created.updated_at);
//!
//! let updated = HeaderInfo::stamp(Some(&created), &Stamp::new("main.c", jdoe, at(11, 17)));
//! assert_eq!(updated.created_at, at(10, 9));
//! assert_eq!(updated.updated_at, at(11, 17));
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::Field;

/// `strftime` format of the timestamps on the `Created:`/`Updated:` rows.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Format a timestamp the way the header writes it.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp written by [`format_timestamp`].
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
}

/// Errors from the header format engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// No comment style is registered for the language.
    #[error("no header support for language '{0}'")]
    UnsupportedLanguage(String),

    /// The block has the frame's shape but a field does not decode.
    #[error("malformed header field '{field}': {reason}")]
    Malformed { field: Field, reason: String },
}

impl HeaderError {
    pub(crate) fn malformed(field: Field, reason: impl fmt::Display) -> Self {
        HeaderError::Malformed {
            field,
            reason: reason.to_string(),
        }
    }
}

/// Errors from parsing an author string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthorError {
    #[error("expected 'user <email>'")]
    MissingEmail,

    #[error("user name is empty")]
    EmptyUser,

    #[error("invalid email '{0}'")]
    InvalidEmail(String),
}

/// The author as shown on the `By:` row: `user <email>`.
///
/// An author wider than its span is written cut short, usually without the
/// closing `>`. Such a value decodes through [`Author::clipped`] and keeps
/// the text exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Author {
    user: String,
    email: String,
    clipped: Option<String>,
}

impl Author {
    /// Build an author from an already resolved identity.
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            user: identity.user.clone(),
            email: identity.email.clone(),
            clipped: None,
        }
    }

    /// Decode an author that was cut at the span edge.
    ///
    /// Accepts `user <partial-email` or a bare user name prefix. The user
    /// part must not be empty.
    pub fn clipped(text: &str) -> Result<Self, AuthorError> {
        let text = text.trim_end();
        let (user, email) = text.rsplit_once(" <").unwrap_or((text, ""));

        let user = user.trim();
        if user.is_empty() {
            return Err(AuthorError::EmptyUser);
        }

        Ok(Self {
            user: user.to_string(),
            email: email.to_string(),
            clipped: Some(text.trim_start().to_string()),
        })
    }

    /// Whether this author was decoded from a cut-short value.
    pub fn is_clipped(&self) -> bool {
        self.clipped.is_some()
    }

    /// The user name part.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The email part, without angle brackets. Possibly partial when
    /// [`is_clipped`](Self::is_clipped).
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl FromStr for Author {
    type Err = AuthorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.strip_suffix('>').ok_or(AuthorError::MissingEmail)?;
        let (user, email) = inner.rsplit_once(" <").ok_or(AuthorError::MissingEmail)?;

        let user = user.trim_end();
        if user.is_empty() {
            return Err(AuthorError::EmptyUser);
        }

        let valid_email = email.contains('@')
            && !email
                .chars()
                .any(|c| c.is_whitespace() || c == '<' || c == '>');
        if !valid_email {
            return Err(AuthorError::InvalidEmail(email.to_string()));
        }

        Ok(Self {
            user: user.to_string(),
            email: email.to_string(),
            clipped: None,
        })
    }
}

impl TryFrom<String> for Author {
    type Error = AuthorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse().or_else(|err| {
            if s.ends_with('>') {
                Err(err)
            } else {
                Author::clipped(&s)
            }
        })
    }
}

impl From<Author> for String {
    fn from(author: Author) -> Self {
        author.to_string()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.clipped {
            Some(text) => f.write_str(text),
            None => write!(f, "{} <{}>", self.user, self.email),
        }
    }
}

/// Operator identity, resolved from configuration before any header work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// User name written on the `by` fields.
    pub user: String,
    /// Email shown in the author field.
    pub email: String,
}

impl Identity {
    pub fn new(user: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            email: email.into(),
        }
    }
}

/// The fresh values of one insert or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Current base name of the document.
    pub filename: String,
    /// Who is performing the operation.
    pub identity: Identity,
    /// When the operation happens.
    pub now: NaiveDateTime,
}

impl Stamp {
    pub fn new(filename: impl Into<String>, identity: Identity, now: NaiveDateTime) -> Self {
        Self {
            filename: filename.into(),
            identity,
            now,
        }
    }
}

/// Decoded header metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// Base name of the file.
    pub filename: String,
    /// `user <email>` of the last operator.
    pub author: Author,
    /// When the header was first inserted.
    pub created_at: NaiveDateTime,
    /// Who first inserted the header.
    pub created_by: String,
    /// When the header was last refreshed.
    pub updated_at: NaiveDateTime,
    /// Who last refreshed the header.
    pub updated_by: String,
}

impl HeaderInfo {
    /// Merge a prior header with the fresh values of the current operation.
    ///
    /// Precedence, field by field:
    /// - `filename`, `author`, `updated_at`, `updated_by`: always from `stamp`
    /// - `created_at`, `created_by`: from `prior` when present, otherwise
    ///   from `stamp`
    ///
    /// Timestamps are truncated to whole seconds, the header's precision.
    pub fn stamp(prior: Option<&HeaderInfo>, stamp: &Stamp) -> HeaderInfo {
        let now = whole_seconds(stamp.now);
        let user = stamp.identity.user.clone();

        let (created_at, created_by) = match prior {
            Some(prior) => (prior.created_at, prior.created_by.clone()),
            None => (now, user.clone()),
        };

        HeaderInfo {
            filename: stamp.filename.clone(),
            author: Author::from_identity(&stamp.identity),
            created_at,
            created_by,
            updated_at: now,
            updated_by: user,
        }
    }
}

fn whole_seconds(at: NaiveDateTime) -> NaiveDateTime {
    at.with_nanosecond(0).unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn jdoe() -> Identity {
        Identity::new("jdoe", "jdoe@student.42.fr")
    }

    mod author {
        use super::*;

        #[test]
        fn parses_user_and_email() {
            let author: Author = "jdoe <jdoe@student.42.fr>".parse().unwrap();
            assert_eq!(author.user(), "jdoe");
            assert_eq!(author.email(), "jdoe@student.42.fr");
            assert_eq!(author.to_string(), "jdoe <jdoe@student.42.fr>");
        }

        #[test]
        fn user_may_contain_spaces() {
            let author: Author = "Jane Doe <jane@example.com>".parse().unwrap();
            assert_eq!(author.user(), "Jane Doe");
        }

        #[test]
        fn missing_brackets_rejected() {
            assert_eq!(
                "jdoe jdoe@student.42.fr".parse::<Author>(),
                Err(AuthorError::MissingEmail)
            );
            assert_eq!(
                "jdoe <jdoe@student.42.fr".parse::<Author>(),
                Err(AuthorError::MissingEmail)
            );
        }

        #[test]
        fn empty_user_rejected() {
            assert_eq!(
                " <jdoe@student.42.fr>".parse::<Author>(),
                Err(AuthorError::EmptyUser)
            );
            assert_eq!(
                "  <jdoe@student.42.fr>".parse::<Author>(),
                Err(AuthorError::EmptyUser)
            );
        }

        #[test]
        fn email_without_at_rejected() {
            assert!(matches!(
                "jdoe <nowhere>".parse::<Author>(),
                Err(AuthorError::InvalidEmail(_))
            ));
        }

        #[test]
        fn serde_uses_display_form() {
            let author: Author = "jdoe <jdoe@student.42.fr>".parse().unwrap();
            let json = serde_json::to_string(&author).unwrap();
            assert_eq!(json, "\"jdoe <jdoe@student.42.fr>\"");
            let back: Author = serde_json::from_str(&json).unwrap();
            assert_eq!(back, author);
        }

        #[test]
        fn clipped_keeps_text_as_written() {
            let author = Author::clipped("jbdupont <jean-baptiste.dupont@student.4").unwrap();
            assert!(author.is_clipped());
            assert_eq!(author.user(), "jbdupont");
            assert_eq!(author.email(), "jean-baptiste.dupont@student.4");
            assert_eq!(author.to_string(), "jbdupont <jean-baptiste.dupont@student.4");
        }

        #[test]
        fn clipped_inside_user_name() {
            let author = Author::clipped("averyveryverylongloginname").unwrap();
            assert_eq!(author.user(), "averyveryverylongloginname");
            assert_eq!(author.email(), "");
            assert_eq!(author.to_string(), "averyveryverylongloginname");
        }

        #[test]
        fn clipped_still_needs_a_user() {
            assert_eq!(Author::clipped(" <jdoe@stu"), Err(AuthorError::EmptyUser));
            assert_eq!(Author::clipped("   "), Err(AuthorError::EmptyUser));
        }

        #[test]
        fn serde_accepts_cut_short_form() {
            let back: Author = serde_json::from_str("\"jbdupont <jean-baptiste\"").unwrap();
            assert!(back.is_clipped());
            assert!(serde_json::from_str::<Author>("\"jdoe <nowhere>\"").is_err());
        }
    }

    mod timestamps {
        use super::*;

        #[test]
        fn format_is_fixed_width() {
            assert_eq!(
                format_timestamp(&at(2024, 1, 10, 9, 0, 0)),
                "2024/01/10 09:00:00"
            );
        }

        #[test]
        fn parse_accepts_written_form() {
            assert_eq!(
                parse_timestamp("2024/02/01 17:30:00").unwrap(),
                at(2024, 2, 1, 17, 30, 0)
            );
        }

        #[test]
        fn parse_rejects_impossible_dates() {
            assert!(parse_timestamp("2024/13/99 99:99:99").is_err());
            assert!(parse_timestamp("2024-01-10 09:00:00").is_err());
            assert!(parse_timestamp("").is_err());
        }
    }

    mod merge {
        use super::*;

        #[test]
        fn fresh_header_created_equals_updated() {
            let info = HeaderInfo::stamp(None, &Stamp::new("main.c", jdoe(), at(2024, 1, 10, 9, 0, 0)));
            assert_eq!(info.created_at, info.updated_at);
            assert_eq!(info.created_by, info.updated_by);
            assert_eq!(info.filename, "main.c");
            assert_eq!(info.author.to_string(), "jdoe <jdoe@student.42.fr>");
        }

        #[test]
        fn refresh_preserves_creator() {
            let first = HeaderInfo::stamp(None, &Stamp::new("main.c", jdoe(), at(2024, 1, 10, 9, 0, 0)));
            let other = Identity::new("marvin", "marvin@student.42.fr");
            let second = HeaderInfo::stamp(
                Some(&first),
                &Stamp::new("main.c", other, at(2024, 2, 1, 17, 30, 0)),
            );

            assert_eq!(second.created_at, at(2024, 1, 10, 9, 0, 0));
            assert_eq!(second.created_by, "jdoe");
            assert_eq!(second.updated_at, at(2024, 2, 1, 17, 30, 0));
            assert_eq!(second.updated_by, "marvin");
            assert_eq!(second.author.user(), "marvin");
        }

        #[test]
        fn refresh_takes_current_filename() {
            let first = HeaderInfo::stamp(None, &Stamp::new("old.c", jdoe(), at(2024, 1, 10, 9, 0, 0)));
            let second = HeaderInfo::stamp(
                Some(&first),
                &Stamp::new("new.c", jdoe(), at(2024, 1, 11, 9, 0, 0)),
            );
            assert_eq!(second.filename, "new.c");
        }

        #[test]
        fn sub_second_precision_dropped() {
            let now = at(2024, 1, 10, 9, 0, 0)
                .with_nanosecond(123_456_789)
                .unwrap();
            let info = HeaderInfo::stamp(None, &Stamp::new("main.c", jdoe(), now));
            assert_eq!(info.updated_at, at(2024, 1, 10, 9, 0, 0));
        }
    }
}
