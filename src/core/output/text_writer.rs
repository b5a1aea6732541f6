//! Plain text output writer.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CorpusError, Result};

/// Joins lines with `\n`. The last line has no trailing newline.
pub fn to_text(lines: &[String]) -> String {
    lines.join("\n")
}

/// Writes lines to `output_path`, creating parent directories and
/// overwriting any existing file.
pub fn write_text(lines: &[String], output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    info!("Saving {}", path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CorpusError::io(parent, e))?;
    }
    fs::write(path, to_text(lines)).map_err(|e| CorpusError::io(path, e))
}
