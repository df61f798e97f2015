//! Render command - load the manifest and write the catalog page

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::error;

use crate::catalog::filter_books;
use crate::config::Config;
use crate::loader::{self, ManifestSource};
use crate::manifest::Book;
use crate::render::{render_app, render_error_page, render_page};

/// Run the render command
pub fn run(manifest: Option<&str>, query: &str, output: Option<&Path>, quiet: bool) -> Result<()> {
    let config = Config::load()?;
    let source = ManifestSource::parse(&config.render.manifest(manifest));
    let output = config.render.output(output);

    let Some(books) = load_books(&source)? else {
        // The display area still gets content: the fixed error panel.
        write_page(&output, &render_error_page())?;
        anyhow::bail!("could not load manifest from {}", source);
    };

    let filtered = filter_books(&books, query);
    let page = render_page(&render_app(&filtered, query), query);
    write_page(&output, &page)?;

    if !quiet {
        println!(
            "{} {} of {} book(s) rendered to {:?}",
            "Done!".green().bold(),
            filtered.len(),
            books.len(),
            output
        );
    }

    Ok(())
}

/// Synchronous wrapper for the async loader using a tokio runtime.
///
/// A load failure is terminal: it is logged and mapped to `None` so the
/// caller halts instead of retrying.
pub fn load_books(source: &ManifestSource) -> Result<Option<Vec<Book>>> {
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    match rt.block_on(loader::load(source)) {
        Ok(books) => Ok(Some(books)),
        Err(e) => {
            error!("manifest load failed: {:#}", e);
            Ok(None)
        }
    }
}

/// Write the page to a file, or to stdout when the path is `-`.
pub fn write_page(output: &Path, page: &str) -> Result<()> {
    if output == Path::new("-") {
        print!("{}", page);
        return Ok(());
    }
    std::fs::write(output, page).with_context(|| format!("Failed to write {:?}", output))
}
