//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! Command results and warnings go through this module so that `--quiet`
//! is honored in one place. Diagnostics go through `tracing` instead.

pub mod output;
