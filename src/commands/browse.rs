//! Browse command - live search loop with debounced re-rendering
//!
//! The manifest is loaded once at startup; afterwards every stdin line is a
//! new search query. Queries are fed through the debouncer so a burst of
//! input produces a single render with the final value, and each render
//! rebuilds the page from scratch.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;

use crate::catalog::filter_books;
use crate::config::Config;
use crate::debounce::{Debouncer, SEARCH_DELAY};
use crate::loader::{self, ManifestSource};
use crate::manifest::Book;
use crate::render::{render_app, render_error_page, render_page};

use super::render::write_page;

/// Run the browse command
pub fn run(manifest: Option<&str>, output: Option<&Path>, quiet: bool) -> Result<()> {
    let config = Config::load()?;
    let source = ManifestSource::parse(&config.render.manifest(manifest));
    let output = config.render.output(output);

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(run_loop(&source, &output, quiet))
}

async fn run_loop(source: &ManifestSource, output: &Path, quiet: bool) -> Result<()> {
    let books = match loader::load(source).await {
        Ok(books) => Arc::new(books),
        Err(e) => {
            error!("manifest load failed: {:#}", e);
            write_page(output, &render_error_page())?;
            anyhow::bail!("could not load manifest from {}", source);
        }
    };

    // Initial unfiltered render of the whole catalog.
    render_to(output, &books, "")?;
    if !quiet {
        println!(
            "{} book(s) loaded, page written to {:?}",
            books.len().to_string().bold(),
            output
        );
        println!("Type a query and press Enter to filter; Ctrl-D exits.");
    }

    let mut debouncer = Debouncer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let books = Arc::clone(&books);
        let output = output.to_path_buf();
        debouncer.schedule(SEARCH_DELAY, move || {
            render_and_report(&output, &books, &line, quiet);
        });
    }

    debouncer.flush().await;
    Ok(())
}

fn render_and_report(output: &PathBuf, books: &[Book], query: &str, quiet: bool) {
    match render_to(output, books, query) {
        Ok(count) => {
            if !quiet {
                println!("{} kitap ({:?})", count, query.trim());
            }
        }
        Err(e) => error!("render failed: {:#}", e),
    }
}

/// Filter, render, and write the page. Returns the number of books shown.
fn render_to(output: &Path, books: &[Book], query: &str) -> Result<usize> {
    let filtered = filter_books(books, query);
    let page = render_page(&render_app(&filtered, query), query);
    write_page(output, &page)?;
    Ok(filtered.len())
}
