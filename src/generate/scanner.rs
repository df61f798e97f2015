use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

use crate::collate;

/// A PDF discovered under the source directory.
#[derive(Debug, Clone)]
pub struct PdfEntry {
    /// File name, e.g. `yapay_zeka-giris.pdf`
    pub file_name: String,
    /// File name without its extension
    pub stem: String,
    /// Path relative to the PDF directory, forward slashes
    pub relative: String,
    /// First-level subdirectory the PDF sits in, when any
    pub subdir: Option<String>,
}

/// Enumerate PDF files under `dir`, sorted by locale-aware comparison of
/// their relative paths. First-level subdirectories are included (they carry
/// folder categories); deeper nesting is ignored.
pub fn scan_pdfs(dir: &Path) -> Result<Vec<PdfEntry>> {
    if !dir.is_dir() {
        anyhow::bail!("PDF directory not found: {:?}", dir);
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(2)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_pdf_file(path) {
            continue;
        }

        let relative = path.strip_prefix(dir).unwrap_or(path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let subdir = relative
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string());

        entries.push(PdfEntry {
            file_name,
            stem,
            relative: relative.to_string_lossy().replace('\\', "/"),
            subdir,
        });
    }

    entries.sort_by(|a, b| collate::compare(&a.relative, &b.relative));
    Ok(entries)
}

/// Enumerate cover file names, relative to the covers directory.
/// A missing directory degrades to an empty set.
pub fn scan_covers(dir: &Path) -> HashSet<String> {
    if !dir.is_dir() {
        warn!("covers directory {:?} not found, records will have no covers", dir);
        return HashSet::new();
    }

    let mut names = HashSet::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(2)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(dir) {
            names.insert(relative.to_string_lossy().replace('\\', "/"));
        }
    }
    names
}

/// Check if a path is a PDF file (extension match, case-insensitive).
fn is_pdf_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase() == "pdf")
        .unwrap_or(false)
}
