//! core::parse
//!
//! Recognize and decode header blocks.
//!
//! # Stages
//!
//! 1. [`extract_header`] looks at the first [`HEADER_ROWS`] lines of a
//!    document and returns them if they have the shape of the frame.
//! 2. [`get_header_info`] decodes the field spans of an extracted block.
//!
//! A document without a frame has no header. A document with a frame whose
//! fields do not decode has a malformed header. [`inspect`] runs both stages
//! and keeps the two outcomes apart.
//!
//! Neither stage needs the language id: delimiters occupy the margins, and
//! a wrong delimiter width shifts the frame and breaks the match.

use super::header::{parse_timestamp, Author, HeaderError, HeaderInfo};
use super::layout::{columns, matches_frame, Field, HEADER_ROWS, HEADER_WIDTH};

/// Outcome of looking for a header in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderStatus {
    /// The leading lines are not a header frame.
    Absent,
    /// The frame is present but a field does not decode.
    Malformed(HeaderError),
    /// A valid header.
    Present(HeaderInfo),
}

impl HeaderStatus {
    /// The decoded header, if valid.
    pub fn info(&self) -> Option<&HeaderInfo> {
        match self {
            HeaderStatus::Present(info) => Some(info),
            _ => None,
        }
    }
}

/// Return the header block at the top of `text`, if there is one.
///
/// The block is returned verbatim, one `\n`-terminated line per row. CRLF
/// line endings are normalized to LF. Returns `None` when `text` has fewer
/// than [`HEADER_ROWS`] lines or the lines do not match the frame.
///
/// # Example
///
/// ```
/// use stdheader::core::parse::extract_header;
///
/// assert_eq!(extract_header("int main(void) {}\n"), None);
/// ```
pub fn extract_header(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().take(HEADER_ROWS).collect();
    if lines.len() < HEADER_ROWS || !matches_frame(&lines) {
        return None;
    }

    let mut block = String::with_capacity(HEADER_ROWS * (HEADER_WIDTH + 1));
    for line in lines {
        block.push_str(line);
        block.push('\n');
    }
    Some(block)
}

/// Decode the fields of a block returned by [`extract_header`].
///
/// # Errors
///
/// Returns [`HeaderError::Malformed`] naming the first field that does not
/// decode. A block without the frame's geometry is reported against the
/// first field.
pub fn get_header_info(raw: &str) -> Result<HeaderInfo, HeaderError> {
    let lines: Vec<&str> = raw.lines().collect();
    let geometry_ok = lines.len() == HEADER_ROWS
        && lines
            .iter()
            .all(|line| line.chars().count() == HEADER_WIDTH);
    if !geometry_ok {
        return Err(HeaderError::malformed(
            Field::Filename,
            format!("expected {HEADER_ROWS} rows of {HEADER_WIDTH} columns"),
        ));
    }

    let filename = text_field(&lines, Field::Filename)?;
    let author = author_field(&lines)?;
    let created_at = timestamp_field(&lines, Field::CreatedAt)?;
    let created_by = text_field(&lines, Field::CreatedBy)?;
    let updated_at = timestamp_field(&lines, Field::UpdatedAt)?;
    let updated_by = text_field(&lines, Field::UpdatedBy)?;

    Ok(HeaderInfo {
        filename,
        author,
        created_at,
        created_by,
        updated_at,
        updated_by,
    })
}

/// Look for a header and decode it, keeping absent and malformed apart.
pub fn inspect(text: &str) -> HeaderStatus {
    match extract_header(text) {
        None => HeaderStatus::Absent,
        Some(raw) => match get_header_info(&raw) {
            Ok(info) => HeaderStatus::Present(info),
            Err(err) => HeaderStatus::Malformed(err),
        },
    }
}

/// The trimmed contents of a field span.
fn field_value(lines: &[&str], field: Field) -> String {
    let span = field.span();
    columns(lines[span.row], span.start, span.width)
        .trim()
        .to_string()
}

fn text_field(lines: &[&str], field: Field) -> Result<String, HeaderError> {
    let value = field_value(lines, field);
    if value.is_empty() {
        return Err(HeaderError::malformed(field, "empty"));
    }
    Ok(value)
}

/// The author span, accepting a value that was cut at the span edge.
fn author_field(lines: &[&str]) -> Result<Author, HeaderError> {
    let value = field_value(lines, Field::Author);
    let reaches_edge = value.chars().count() + 1 >= Field::Author.span().width;
    value
        .parse::<Author>()
        .or_else(|err| if reaches_edge { Author::clipped(&value) } else { Err(err) })
        .map_err(|e| HeaderError::malformed(Field::Author, e))
}

fn timestamp_field(
    lines: &[&str],
    field: Field,
) -> Result<chrono::NaiveDateTime, HeaderError> {
    let value = field_value(lines, field);
    parse_timestamp(&value)
        .map_err(|e| HeaderError::malformed(field, format!("'{value}': {e}")))
}
