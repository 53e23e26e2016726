//! core::layout
//!
//! The fixed geometry of a header block.
//!
//! # Frame
//!
//! A header is [`HEADER_ROWS`] rows of exactly [`HEADER_WIDTH`] characters.
//! The leftmost and rightmost [`DELIMITER_MARGIN`] columns belong to the
//! comment delimiters of the language; everything between them is the
//! language-agnostic frame: the border, the labels, the ASCII-art motif, and
//! the blank spans reserved for field values.
//!
//! ```text
//! /* ************************************************************************** */
//! /*                                                                            */
//! /*                                                        :::      ::::::::   */
//! /*   main.c                                             :+:      :+:    :+:   */
//! /*                                                    +:+ +:+         +:+     */
//! /*   By: jdoe <jdoe@student.42.fr>                  +#+  +:+       +#+        */
//! /*                                                +#+#+#+#+#+   +#+           */
//! /*   Created: 2024/01/10 09:00:00 by jdoe              #+#    #+#             */
//! /*   Updated: 2024/02/01 17:30:00 by jdoe             ###   ########.fr       */
//! /*                                                                            */
//! /* ************************************************************************** */
//! ```
//!
//! All widths and offsets count `char`s, not bytes.

use std::fmt;

/// Number of rows in a header block.
pub const HEADER_ROWS: usize = 11;

/// Width of every header row, in characters.
pub const HEADER_WIDTH: usize = 80;

/// Columns at each edge of a row reserved for comment delimiters.
pub const DELIMITER_MARGIN: usize = 5;

/// The frame template.
///
/// Field spans are blank. The outermost columns hold `*` placeholders that
/// the renderer overwrites with the language's delimiters.
pub const FRAME: [&str; HEADER_ROWS] = [
    "********************************************************************************",
    "*                                                                              *",
    "*                                                         :::      ::::::::    *",
    "*                                                       :+:      :+:    :+:    *",
    "*                                                     +:+ +:+         +:+      *",
    "*    By:                                            +#+  +:+       +#+         *",
    "*                                                 +#+#+#+#+#+   +#+            *",
    "*    Created:                     by                   #+#    #+#              *",
    "*    Updated:                     by                  ###   ########.fr        *",
    "*                                                                              *",
    "********************************************************************************",
];

/// A data field of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Filename,
    Author,
    CreatedAt,
    CreatedBy,
    UpdatedAt,
    UpdatedBy,
}

/// The column range reserved for one field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    /// Row index within the header.
    pub row: usize,
    /// First column of the span.
    pub start: usize,
    /// Number of columns in the span.
    pub width: usize,
}

impl FieldSpan {
    /// One past the last column of the span.
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    /// Whether the span covers `(row, col)`.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.start && col < self.end()
    }
}

impl Field {
    /// Every field, in rendering order.
    pub const ALL: [Field; 6] = [
        Field::Filename,
        Field::Author,
        Field::CreatedAt,
        Field::CreatedBy,
        Field::UpdatedAt,
        Field::UpdatedBy,
    ];

    /// Where this field lives in the frame.
    pub const fn span(self) -> FieldSpan {
        let (row, start, width) = match self {
            Field::Filename => (3, 5, 43),
            Field::Author => (5, 9, 39),
            Field::CreatedAt => (7, 14, 19),
            Field::CreatedBy => (7, 37, 11),
            Field::UpdatedAt => (8, 14, 19),
            Field::UpdatedBy => (8, 37, 11),
        };
        FieldSpan { row, start, width }
    }

    /// Name used in error messages and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Field::Filename => "filename",
            Field::Author => "author",
            Field::CreatedAt => "created_at",
            Field::CreatedBy => "created_by",
            Field::UpdatedAt => "updated_at",
            Field::UpdatedBy => "updated_by",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `(row, col)` falls inside any field span.
pub fn in_field(row: usize, col: usize) -> bool {
    Field::ALL.iter().any(|field| field.span().covers(row, col))
}

/// Check that `lines` have the shape of a header frame.
///
/// True iff there are exactly [`HEADER_ROWS`] lines of exactly
/// [`HEADER_WIDTH`] characters, and every column between the delimiter
/// margins that is not part of a field span matches [`FRAME`].
pub fn matches_frame<S: AsRef<str>>(lines: &[S]) -> bool {
    if lines.len() != HEADER_ROWS {
        return false;
    }

    lines.iter().zip(FRAME.iter()).enumerate().all(|(row, (line, template))| {
        let line = line.as_ref();
        if line.chars().count() != HEADER_WIDTH {
            return false;
        }

        line.chars()
            .zip(template.chars())
            .enumerate()
            .skip(DELIMITER_MARGIN)
            .take(HEADER_WIDTH - 2 * DELIMITER_MARGIN)
            .all(|(col, (actual, expected))| in_field(row, col) || actual == expected)
    })
}

/// Slice `line` by character columns.
///
/// Columns past the end of the line are ignored.
pub fn columns(line: &str, start: usize, width: usize) -> String {
    line.chars().skip(start).take(width).collect()
}
