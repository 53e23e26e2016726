//! stdheader - Insert and refresh 42-style file headers
//!
//! stdheader renders, recognizes, decodes and refreshes the fixed-size
//! comment banner that 42 school projects carry at the top of every source
//! file. The same 80-column frame is wrapped in each language's comment
//! delimiters.
//!
//! # Architecture
//!
//! - [`core`] - The header format: comment styles, frame layout, parsing,
//!   rendering and configuration
//! - [`engine`] - Plans and applies header edits to files
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - User-facing output
//! - [`logging`] - Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use stdheader::core::header::{HeaderInfo, Identity, Stamp};
//! use stdheader::core::{extract_header, get_header_info, render_header};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 10)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let stamp = Stamp::new("main.c", Identity::new("jdoe", "jdoe@student.42.fr"), now);
//! let info = HeaderInfo::stamp(None, &stamp);
//!
//! let header = render_header("c", &info).unwrap();
//! let raw = extract_header(&header).unwrap();
//! assert_eq!(get_header_info(&raw).unwrap(), info);
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod logging;
pub mod ui;
