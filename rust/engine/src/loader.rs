// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document fetching over HTTP or from disk.

use crate::error::LoadError;
use gbxml_lite_core::{parse_gbxml, GbxmlDocument};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Where a gbXML document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// `http://` or `https://` URL
    Url(String),
    /// Local file
    Path(PathBuf),
    /// Document text already in memory
    Inline(String),
}

impl DocumentSource {
    /// Classify a configured source string: URLs by scheme, everything else
    /// is a file path.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DocumentSource::Url(source.to_string())
        } else {
            DocumentSource::Path(PathBuf::from(source))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Url(url) => f.write_str(url),
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Inline(text) => write!(f, "<inline, {} bytes>", text.len()),
        }
    }
}

/// Fetches and parses gbXML documents.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    http: reqwest::Client,
}

impl DocumentLoader {
    /// Create a loader whose HTTP requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, LoadError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Raw document text
    pub async fn fetch_text(&self, source: &DocumentSource) -> Result<String, LoadError> {
        let result = match source {
            DocumentSource::Url(url) => self.get(url).await,
            DocumentSource::Path(path) => tokio::fs::read_to_string(path).await.map_err(LoadError::from),
            DocumentSource::Inline(text) => Ok(text.clone()),
        };

        if let Err(error) = &result {
            log_failure(source, error);
        }
        result
    }

    /// Fetch and parse a document
    pub async fn fetch(&self, source: &DocumentSource) -> Result<GbxmlDocument, LoadError> {
        let start = std::time::Instant::now();
        let text = self.fetch_text(source).await?;

        let document = parse_gbxml(&text).map_err(|error| {
            tracing::error!(source = %source, error = %error, "Failed to parse gbXML document");
            LoadError::from(error)
        })?;

        tracing::info!(
            source = %source,
            bytes = text.len(),
            surfaces = document.surface_count(),
            elapsed_ms = start.elapsed().as_millis(),
            "Fetched gbXML document"
        );
        Ok(document)
    }

    async fn get(&self, url: &str) -> Result<String, LoadError> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(resp.text().await?)
    }
}

/// Client errors are an expected outcome (wrong URL, missing file); anything
/// else is logged as unexpected.
fn log_failure(source: &DocumentSource, error: &LoadError) {
    if error.is_client_error() {
        tracing::warn!(source = %source, error = %error, "Expected error fetching document");
    } else {
        tracing::error!(source = %source, error = %error, "Unexpected error fetching document");
    }
}
