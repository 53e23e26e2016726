//! core::render
//!
//! Render header metadata into a literal header block.
//!
//! # Design
//!
//! Rendering is a pure function of the language id and a [`HeaderInfo`]:
//! start from [`FRAME`], overwrite the margins with the language's
//! delimiters, then write each field value into its span. Values longer
//! than their span are truncated; shorter values are padded with spaces.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use stdheader::core::header::{HeaderInfo, Identity, Stamp};
//! use stdheader::core::render::render_header;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let stamp = Stamp::new("main.c", Identity::new("jdoe", "jdoe@student.42.fr"), now);
//! let info = HeaderInfo::stamp(None, &stamp);
//!
//! let header = render_header("c", &info).unwrap();
//! assert_eq!(header.lines().count(), 11);
//! assert!(header.contains("Created: 2024/01/10 09:00:00 by jdoe"));
//!
//! assert!(render_header("brainfuck", &info).is_err());
//! ```

use std::iter;

use super::header::{format_timestamp, HeaderError, HeaderInfo};
use super::layout::{Field, FRAME, HEADER_ROWS, HEADER_WIDTH};
use super::style::comment_style;

/// Render `info` as a header block for `language_id`.
///
/// The result is [`HEADER_ROWS`] lines of exactly [`HEADER_WIDTH`]
/// characters, each terminated by `\n`. Control characters in field values
/// are written as spaces.
///
/// # Errors
///
/// Returns [`HeaderError::UnsupportedLanguage`] if the language has no
/// comment style.
pub fn render_header(language_id: &str, info: &HeaderInfo) -> Result<String, HeaderError> {
    let (left, right) = comment_style(language_id)
        .delimiters()
        .ok_or_else(|| HeaderError::UnsupportedLanguage(language_id.to_string()))?;

    let mut rows: Vec<Vec<char>> = FRAME.iter().map(|row| row.chars().collect()).collect();

    for row in &mut rows {
        overwrite(row, 0, &left);
        overwrite(row, HEADER_WIDTH - right.chars().count(), &right);
    }

    for field in Field::ALL {
        let span = field.span();
        let value = fit(&field_text(info, field), span.width);
        overwrite(&mut rows[span.row], span.start, &value);
    }

    let mut out = String::with_capacity(HEADER_ROWS * (HEADER_WIDTH + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    Ok(out)
}

/// The text written into a field's span, before padding.
pub fn field_text(info: &HeaderInfo, field: Field) -> String {
    match field {
        Field::Filename => info.filename.clone(),
        Field::Author => info.author.to_string(),
        Field::CreatedAt => format_timestamp(&info.created_at),
        Field::CreatedBy => info.created_by.clone(),
        Field::UpdatedAt => format_timestamp(&info.updated_at),
        Field::UpdatedBy => info.updated_by.clone(),
    }
}

/// Fields whose text is wider than their span and would be truncated.
pub fn overflowing_fields(info: &HeaderInfo) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| field_text(info, *field).chars().count() > field.span().width)
        .collect()
}

/// Pad or truncate `value` to exactly `width` characters.
fn fit(value: &str, width: usize) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .chain(iter::repeat(' '))
        .take(width)
        .collect()
}

fn overwrite(row: &mut [char], start: usize, text: &str) {
    for (slot, c) in row.iter_mut().skip(start).zip(text.chars()) {
        *slot = c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::header::{Identity, Stamp};
    use crate::core::parse::{extract_header, get_header_info};
    use crate::core::style::supported_languages;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn jdoe() -> Identity {
        Identity::new("jdoe", "jdoe@student.42.fr")
    }

    /// main.c created 2024/01/10 09:00:00, updated 2024/02/01 17:30:00.
    fn example() -> HeaderInfo {
        let created = HeaderInfo::stamp(None, &Stamp::new("main.c", jdoe(), at(2024, 1, 10, 9, 0, 0)));
        HeaderInfo::stamp(
            Some(&created),
            &Stamp::new("main.c", jdoe(), at(2024, 2, 1, 17, 30, 0)),
        )
    }

    const EXPECTED_C: &str = "\
/* ************************************************************************** */
/*                                                                            */
/*                                                        :::      ::::::::   */
/*   main.c                                             :+:      :+:    :+:   */
/*                                                    +:+ +:+         +:+     */
/*   By: jdoe <jdoe@student.42.fr>                  +#+  +:+       +#+        */
/*                                                +#+#+#+#+#+   +#+           */
/*   Created: 2024/01/10 09:00:00 by jdoe              #+#    #+#             */
/*   Updated: 2024/02/01 17:30:00 by jdoe             ###   ########.fr       */
/*                                                                            */
/* ************************************************************************** */
";

    #[test]
    fn renders_canonical_c_header() {
        assert_eq!(render_header("c", &example()).unwrap(), EXPECTED_C);
    }

    #[test]
    fn renders_hash_delimiters() {
        let header = render_header("python", &example()).unwrap();
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(
            lines[0],
            "# **************************************************************************** #"
        );
        assert_eq!(
            lines[3],
            "#    main.c                                             :+:      :+:    :+:    #"
        );
    }

    #[test]
    fn renders_markup_delimiters() {
        let header = render_header("html", &example()).unwrap();
        for line in header.lines() {
            assert!(line.starts_with("<!-- "), "{line}");
            assert!(line.ends_with(" -->"), "{line}");
        }
    }

    #[test]
    fn unsupported_language_fails() {
        assert_eq!(
            render_header("cobol", &example()),
            Err(HeaderError::UnsupportedLanguage("cobol".to_string()))
        );
    }

    #[test]
    fn fixed_geometry_for_every_language() {
        for (id, _) in supported_languages() {
            let header = render_header(id, &example()).unwrap();
            assert!(header.ends_with('\n'), "{id}");
            let lines: Vec<&str> = header.lines().collect();
            assert_eq!(lines.len(), HEADER_ROWS, "{id}");
            for line in lines {
                assert_eq!(line.chars().count(), HEADER_WIDTH, "{id}: {line}");
            }
        }
    }

    #[test]
    fn round_trips_for_every_language() {
        let info = example();
        for (id, _) in supported_languages() {
            let header = render_header(id, &info).unwrap();
            let raw = extract_header(&header).unwrap_or_else(|| panic!("{id}: frame"));
            assert_eq!(get_header_info(&raw).unwrap(), info, "{id}");
        }
    }

    #[test]
    fn long_filename_is_truncated() {
        let mut info = example();
        info.filename = "a".repeat(60);
        let header = render_header("c", &info).unwrap();
        let parsed = get_header_info(&extract_header(&header).unwrap()).unwrap();
        assert_eq!(parsed.filename, "a".repeat(Field::Filename.span().width));
        assert_eq!(overflowing_fields(&info), vec![Field::Filename]);
    }

    #[test]
    fn wide_characters_count_as_one_column() {
        let mut info = example();
        info.filename = "résumé.c".to_string();
        let header = render_header("c", &info).unwrap();
        for line in header.lines() {
            assert_eq!(line.chars().count(), HEADER_WIDTH);
        }
        let parsed = get_header_info(&extract_header(&header).unwrap()).unwrap();
        assert_eq!(parsed.filename, "résumé.c");
    }

    #[test]
    fn control_characters_become_spaces() {
        let mut info = example();
        info.filename = "bad\nname.c".to_string();
        let header = render_header("c", &info).unwrap();
        assert_eq!(header.lines().count(), HEADER_ROWS);
        assert!(header.contains("bad name.c"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let info = example();
        assert_eq!(
            render_header("rust", &info).unwrap(),
            render_header("rust", &info).unwrap()
        );
    }

    #[test]
    fn nothing_overflows_in_example() {
        assert!(overflowing_fields(&example()).is_empty());
    }
}
