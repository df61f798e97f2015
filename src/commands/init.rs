//! Init command - create a config file with the default layout

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::config::Config;

/// Run the init command
pub fn run(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() && !force {
        eprintln!(
            "{}: Config already exists at {}",
            "Error".red().bold(),
            config_path.display()
        );
        eprintln!();
        eprintln!("Use {} to overwrite.", "--force".cyan());
        bail!("Config file already exists");
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let config_content = r#"# pdfshelf configuration
# Paths are resolved against the directory pdfshelf runs in.

[generate]
pdf_dir = "pdfs"
covers_dir = "covers"
output = "books.json"

[render]
# An http(s) URL or a local path.
manifest = "books.json"
output = "catalog.html"
"#;

    std::fs::write(&config_path, config_content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    println!(
        "{} Config written to {}",
        "✓".green(),
        config_path.display()
    );
    println!();
    println!("You can now use:");
    println!(
        "  {} - scan pdfs/ and covers/ and write books.json",
        "pdfshelf generate".cyan()
    );
    println!(
        "  {} - render the catalog to a static HTML page",
        "pdfshelf render".cyan()
    );

    Ok(())
}
