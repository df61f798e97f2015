use anyhow::{Context, Result};
use std::path::Path;

use super::Book;

/// Read and parse a manifest file from disk.
pub fn read_manifest(path: &Path) -> Result<Vec<Book>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let books: Vec<Book> =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?;
    Ok(books)
}
