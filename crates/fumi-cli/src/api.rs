//! Guest directory sources
//!
//! The directory comes either from a Fumi server over HTTP or from a
//! local JSON file. Every failure maps to `DirectoryUnavailable`.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;

use fumi::{DomainError, GuestDirectory, GuestRecord};

use crate::config::Config;

/// Directory served by `fumi-server`
pub struct HttpGuestDirectory {
    client: Client,
    url: String,
}

impl HttpGuestDirectory {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}/api/guests", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl GuestDirectory for HttpGuestDirectory {
    async fn fetch_all(&self) -> Result<Vec<GuestRecord>, DomainError> {
        tracing::debug!("Fetching guest directory from {}", self.url);

        let resp = self.client.get(&self.url).send().await.map_err(|e| {
            DomainError::DirectoryUnavailable(format!("Failed to connect to {}: {}", self.url, e))
        })?;

        if !resp.status().is_success() {
            return Err(DomainError::DirectoryUnavailable(format!(
                "Directory returned {}",
                resp.status()
            )));
        }

        resp.json::<Vec<GuestRecord>>()
            .await
            .map_err(|e| DomainError::DirectoryUnavailable(format!("Failed to parse directory: {}", e)))
    }
}

/// Directory read from a local JSON file on every fetch
pub struct FileGuestDirectory {
    path: PathBuf,
}

impl FileGuestDirectory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl GuestDirectory for FileGuestDirectory {
    async fn fetch_all(&self) -> Result<Vec<GuestRecord>, DomainError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::DirectoryUnavailable(format!("Failed to read {:?}: {}", self.path, e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DomainError::DirectoryUnavailable(format!("Failed to parse {:?}: {}", self.path, e))
        })
    }
}

/// Whichever source the configuration points at
pub enum DirectorySource {
    Http(HttpGuestDirectory),
    File(FileGuestDirectory),
}

impl DirectorySource {
    pub fn from_config(config: &Config) -> Self {
        match &config.directory_path {
            Some(path) => Self::File(FileGuestDirectory::new(path.clone())),
            None => Self::Http(HttpGuestDirectory::new(&config.base_url)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Http(http) => http.url.clone(),
            Self::File(file) => file.path.display().to_string(),
        }
    }
}

#[async_trait]
impl GuestDirectory for DirectorySource {
    async fn fetch_all(&self) -> Result<Vec<GuestRecord>, DomainError> {
        match self {
            Self::Http(http) => http.fetch_all().await,
            Self::File(file) => file.fetch_all().await,
        }
    }
}
