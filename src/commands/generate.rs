//! Generate command - scan the source directories and write the manifest

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::generate::build_manifest;
use crate::manifest::{write_manifest, write_manifest_min};

/// Run the generate command
pub fn run(
    pdf_dir: Option<&Path>,
    covers_dir: Option<&Path>,
    output: Option<&Path>,
    min: bool,
    quiet: bool,
) -> Result<()> {
    let config = Config::load()?;
    let pdf_dir = config.generate.pdf_dir(pdf_dir);
    let covers_dir = config.generate.covers_dir(covers_dir);
    let output = config.generate.output(output);

    if !quiet {
        println!("Scanning {:?} for PDF files...", pdf_dir);
    }

    let books = build_manifest(&pdf_dir, &covers_dir)?;
    let with_cover = books.iter().filter(|book| book.cover.is_some()).count();

    write_manifest(&output, &books)?;
    if min {
        write_manifest_min(&minified_path(&output), &books)?;
    }

    if !quiet {
        println!();
        println!(
            "{} {} PDF(s) processed, {} with covers",
            "Done!".green().bold(),
            books.len(),
            with_cover
        );
        println!("Manifest: {:?}", output);
    }

    Ok(())
}

/// Sibling path for the minified copy: books.json -> books_min.json
fn minified_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = output
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| "json".to_string());
    output.with_file_name(format!("{}_min.{}", stem, ext))
}
