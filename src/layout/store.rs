use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Why a layout document could not be obtained
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("layout store unreachable: {0}")]
    Unreachable(String),

    #[error("layout store answered with status {0}")]
    Status(u16),

    #[error("failed to read layout document: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed layout document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type LayoutResult<T> = std::result::Result<T, LayoutError>;

/// Source of the raw layout document
pub trait DocumentStore {
    /// Human readable location, used in log lines
    fn describe(&self) -> String;

    /// Fetches the raw document text
    fn fetch(&self) -> LayoutResult<String>;
}

/// Reads the layout document from disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentStore for FileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> LayoutResult<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Fetches the layout document over HTTP(S)
pub struct HttpStore {
    url: String,
    client: Client,
}

impl HttpStore {
    pub fn new(url: &str, timeout: Duration) -> LayoutResult<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|error| LayoutError::Unreachable(error.to_string()))?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

impl DocumentStore for HttpStore {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> LayoutResult<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|error| LayoutError::Unreachable(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LayoutError::Status(status.as_u16()));
        }

        response
            .text()
            .map_err(|error| LayoutError::Unreachable(error.to_string()))
    }
}

fn is_remote(source: &str) -> bool {
    let lowered = source.trim().to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}

/// Picks the store for a configured source.
/// Relative filesystem paths are resolved against `base_dir`.
pub fn store_for_source(
    source: &str,
    base_dir: &Path,
    timeout: Duration,
) -> LayoutResult<Box<dyn DocumentStore>> {
    if is_remote(source) {
        return Ok(Box::new(HttpStore::new(source.trim(), timeout)?));
    }

    let path = Path::new(source);
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    };
    Ok(Box::new(FileStore::new(resolved)))
}
