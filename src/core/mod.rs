//! core
//!
//! The header format engine and its configuration.
//!
//! # Modules
//!
//! - [`style`] - Comment style table keyed by language id
//! - [`layout`] - Frame geometry: rows, width, glyphs, field spans
//! - [`header`] - Header metadata value types and merging
//! - [`parse`] - Header recognition and decoding
//! - [`render`] - Header rendering
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Every engine operation is a pure function of its inputs
//! - The engine reports what it finds; callers decide on fallbacks
//! - Languages are table entries, not control flow

pub mod config;
pub mod header;
pub mod layout;
pub mod parse;
pub mod render;
pub mod style;

pub use header::{HeaderError, HeaderInfo};
pub use parse::{extract_header, get_header_info, inspect, HeaderStatus};
pub use render::render_header;
pub use style::supports_language;
