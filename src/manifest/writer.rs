use anyhow::{Context, Result};
use std::path::Path;

use super::Book;

/// Write the manifest as a pretty-printed JSON array, overwriting any
/// existing file.
pub fn write_manifest(path: &Path, books: &[Book]) -> Result<()> {
    let json = serde_json::to_string_pretty(books).context("Failed to serialize manifest")?;
    std::fs::write(path, json + "\n").with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

/// Write a compact copy of the manifest, the variant a catalog page fetches.
pub fn write_manifest_min(path: &Path, books: &[Book]) -> Result<()> {
    let json = serde_json::to_string(books).context("Failed to serialize manifest")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}
