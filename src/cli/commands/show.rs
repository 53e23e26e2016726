//! show command - Print the decoded header of a file

use std::path::Path;

use anyhow::{bail, Context as _, Result};

use crate::core::header::{format_timestamp, HeaderInfo};
use crate::core::parse::{inspect, HeaderStatus};
use crate::engine;
use crate::ui::output;

/// Print the header fields of `file`.
///
/// Output is not affected by `--quiet`.
pub fn show(file: &Path, json: bool) -> Result<()> {
    let document = engine::load_document(file, None)?;

    let info = match inspect(&document.text) {
        HeaderStatus::Present(info) => info,
        HeaderStatus::Absent => bail!("{}: no header", output::format_path(file)),
        HeaderStatus::Malformed(err) => {
            bail!("{}: malformed header: {}", output::format_path(file), err)
        }
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&info).context("Failed to serialize header")?;
        println!("{}", rendered);
    } else {
        println!("{}", format_fields(&info));
    }
    Ok(())
}

fn format_fields(info: &HeaderInfo) -> String {
    format!(
        "filename: {}\nauthor:   {}\ncreated:  {} by {}\nupdated:  {} by {}",
        info.filename,
        info.author,
        format_timestamp(&info.created_at),
        info.created_by,
        format_timestamp(&info.updated_at),
        info.updated_by,
    )
}
