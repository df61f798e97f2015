use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfshelf")]
#[command(about = "CLI tool for generating and rendering a static PDF book catalog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the PDF and cover directories and write the manifest
    Generate {
        /// Source directory containing PDF files (default: pdfs)
        #[arg(long)]
        pdf_dir: Option<PathBuf>,

        /// Directory containing cover images (default: covers)
        #[arg(long)]
        covers_dir: Option<PathBuf>,

        /// Manifest path to write (default: books.json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write a minified copy next to the manifest
        #[arg(long)]
        min: bool,
    },

    /// Render the catalog grid to a static HTML page
    Render {
        /// Manifest location: an http(s) URL or a local path
        manifest: Option<String>,

        /// Search query applied before rendering
        #[arg(long, default_value = "")]
        query: String,

        /// HTML file to write (default: catalog.html, '-' for stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Re-render the catalog as search queries arrive on stdin
    Browse {
        /// Manifest location: an http(s) URL or a local path
        manifest: Option<String>,

        /// HTML file to write on each render (default: catalog.html)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the keyword rules used to guess categories
    Categories,

    /// Create a config file with the default directory layout
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}
