//! Reading and writing source files
//!
//! Text is always UTF-8, independent of platform defaults. Bytes are
//! neither normalized nor re-encoded, so unchanged lines round-trip exactly.

use anyhow::{Context, Result};
use std::path::Path;

/// Read a source file as UTF-8
pub fn read_source(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("File is not valid UTF-8: {}", path.display()))
}

/// Replace the contents of a source file with `text`, encoded as UTF-8
pub fn write_source(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
