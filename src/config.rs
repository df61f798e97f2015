use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from ~/.config/pdfshelf/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration for the generate command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Source directory containing PDF files
    #[serde(default = "default_pdf_dir")]
    pub pdf_dir: PathBuf,

    /// Directory containing cover images
    #[serde(default = "default_covers_dir")]
    pub covers_dir: PathBuf,

    /// Manifest path to write
    #[serde(default = "default_manifest")]
    pub output: PathBuf,
}

/// Configuration for the render and browse commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Manifest location: an http(s) URL or a local path
    #[serde(default = "default_manifest_spec")]
    pub manifest: String,

    /// HTML file to write
    #[serde(default = "default_page")]
    pub output: PathBuf,
}

fn default_pdf_dir() -> PathBuf {
    PathBuf::from("pdfs")
}

fn default_covers_dir() -> PathBuf {
    PathBuf::from("covers")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("books.json")
}

fn default_manifest_spec() -> String {
    "books.json".to_string()
}

fn default_page() -> PathBuf {
    PathBuf::from("catalog.html")
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            pdf_dir: default_pdf_dir(),
            covers_dir: default_covers_dir(),
            output: default_manifest(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest_spec(),
            output: default_page(),
        }
    }
}

impl Config {
    /// Load configuration from the default path (~/.config/pdfshelf/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("pdfshelf").join("config.toml"))
    }
}

impl GenerateConfig {
    /// PDF source directory, with CLI override taking precedence
    pub fn pdf_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.pdf_dir.clone())
    }

    /// Covers directory, with CLI override taking precedence
    pub fn covers_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.covers_dir.clone())
    }

    /// Manifest output path, with CLI override taking precedence
    pub fn output(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output.clone())
    }
}

impl RenderConfig {
    /// Manifest location, with CLI override taking precedence
    pub fn manifest(&self, cli_override: Option<&str>) -> String {
        cli_override
            .map(String::from)
            .unwrap_or_else(|| self.manifest.clone())
    }

    /// Page output path, with CLI override taking precedence
    pub fn output(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output.clone())
    }
}
