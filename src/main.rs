mod catalog;
mod cli;
mod collate;
mod commands;
mod config;
mod debounce;
mod generate;
mod loader;
mod manifest;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            pdf_dir,
            covers_dir,
            output,
            min,
        } => {
            commands::generate::run(
                pdf_dir.as_deref(),
                covers_dir.as_deref(),
                output.as_deref(),
                min,
                cli.quiet,
            )?;
        }
        Commands::Render {
            manifest,
            query,
            output,
        } => {
            commands::render::run(manifest.as_deref(), &query, output.as_deref(), cli.quiet)?;
        }
        Commands::Browse { manifest, output } => {
            commands::browse::run(manifest.as_deref(), output.as_deref(), cli.quiet)?;
        }
        Commands::Categories => {
            commands::categories::run();
        }
        Commands::Init { force } => {
            commands::init::run(force)?;
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout is reserved for command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
