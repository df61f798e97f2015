//! Manifest loading.
//!
//! The catalog is bootstrapped from a single manifest load: one HTTP GET
//! with caching disabled, or one read of a local file. Failure is terminal
//! for the session; callers stop initialization instead of retrying.

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::manifest::{self, Book};

/// Why a manifest could not be loaded over HTTP.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("{url} is not a valid manifest: {source}")]
    Parse {
        url: String,
        source: serde_json::Error,
    },
}

/// Where the manifest comes from: an `http(s)` URL or a local file.
#[derive(Debug, Clone)]
pub enum ManifestSource {
    Url(String),
    File(PathBuf),
}

impl ManifestSource {
    pub fn parse(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            ManifestSource::Url(spec.to_string())
        } else {
            ManifestSource::File(PathBuf::from(spec))
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::Url(url) => write!(f, "{}", url),
            ManifestSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the manifest from its source. One attempt, no retry.
pub async fn load(source: &ManifestSource) -> Result<Vec<Book>> {
    match source {
        ManifestSource::Url(url) => Ok(fetch_manifest(url).await?),
        ManifestSource::File(path) => manifest::read_manifest(path),
    }
}

/// Fetch the manifest over HTTP with cache-bypass headers and parse the
/// body as a JSON array of book records.
pub async fn fetch_manifest(url: &str) -> Result<Vec<Book>, LoadError> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|source| LoadError::Request {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| LoadError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| LoadError::Request {
        url: url.to_string(),
        source,
    })?;

    serde_json::from_str(&body).map_err(|source| LoadError::Parse {
        url: url.to_string(),
        source,
    })
}
