//! Catalog source abstraction for reading the project catalog from a file, the
//! catalog API, or memory.

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use log::info;

/// Endpoint serving the full project catalog.
pub const DEFAULT_CATALOG_URL: &str = "https://api.nearcatalog.xyz/projects";

/// Trait for abstracting where the catalog JSON comes from.
pub trait CatalogSource {
    /// Read the whole catalog document as a string.
    fn read_catalog(&mut self) -> Result<String>;
    /// Human readable origin, recorded in snapshots.
    fn origin(&self) -> String;
}

/// Reads a catalog JSON file from the local filesystem.
pub struct FileSource {
    path: Utf8PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for FileSource {
    fn read_catalog(&mut self) -> Result<String> {
        std::fs::read_to_string(self.path.as_std_path())
            .with_context(|| format!("Failed to read {}", self.path))
    }

    fn origin(&self) -> String {
        self.path.to_string()
    }
}

/// Fetches the catalog over HTTP with a single blocking request.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

impl CatalogSource for HttpSource {
    fn read_catalog(&mut self) -> Result<String> {
        info!("fetching catalog from {}", self.url);
        let response = reqwest::blocking::get(&self.url)
            .with_context(|| format!("Failed to fetch projects from {}", self.url))?;
        let status = response.status();
        if !status.is_success() {
            bail!("Failed to fetch projects from {}: HTTP {}", self.url, status);
        }
        response
            .text()
            .with_context(|| format!("Failed to read response body from {}", self.url))
    }

    fn origin(&self) -> String {
        self.url.clone()
    }
}

/// In-memory catalog, mostly for tests and embedding.
pub struct MemorySource {
    text: String,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CatalogSource for MemorySource {
    fn read_catalog(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn origin(&self) -> String {
        "memory".to_string()
    }
}
