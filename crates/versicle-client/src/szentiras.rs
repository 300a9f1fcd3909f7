//! Async client for the szentiras.eu verse text API.
//!
//! A verse is addressed as `/api/ref/{Abbrev}%20{chapter},{verse}/{trans}`
//! and answered as JSON with a `text` field. Requests carry an explicit
//! timeout and are retried once on failure before the error is surfaced;
//! the session treats any surfaced error as a failed round start.

use crate::headings::apply_heading_markers;
use crate::FetchError;
use serde::Deserialize;
use std::time::Duration;
use versicle_core::{VerseRef, VerseSource};

/// Base URL of the live verse text service.
pub const DEFAULT_BASE_URL: &str = "https://szentiras.eu/api";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause before a retry.
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Client for the szentiras.eu API.
#[derive(Clone, Debug)]
pub struct SzentirasClient {
    http: reqwest::Client,
    base_url: String,
    keep_headings: bool,
    retries: u32,
}

impl SzentirasClient {
    /// Create a client with the default base URL, timeout and a single
    /// retry.
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            keep_headings: false,
            retries: 1,
        })
    }

    /// Point the client at a different service root (primarily for tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Keep structural headings as `{{...}}` markers instead of stripping
    /// them.
    pub fn with_headings(mut self, keep: bool) -> Self {
        self.keep_headings = keep;
        self
    }

    /// Number of retries after a failed request.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// URL addressing a verse reference.
    pub fn verse_url(&self, verse: &VerseRef) -> String {
        format!(
            "{}/ref/{}%20{},{}/{}",
            self.base_url, verse.abbreviation, verse.chapter, verse.verse, verse.translation
        )
    }

    async fn fetch_once(&self, verse: &VerseRef) -> Result<String, FetchError> {
        let url = self.verse_url(verse);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        let body: VerseResponse = response.json().await?;
        let text = body.text.ok_or(FetchError::MissingText)?;
        if let Some(canonical) = &body.canonical_url {
            log::debug!("verse {} loaded ({})", verse.label(), canonical);
        }
        Ok(apply_heading_markers(text.trim(), self.keep_headings))
    }
}

/// Response shape of the `ref` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerseResponse {
    text: Option<String>,
    canonical_url: Option<String>,
}

impl VerseSource for SzentirasClient {
    type Error = FetchError;

    async fn fetch(&self, verse: &VerseRef) -> Result<String, Self::Error> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(verse).await {
                Ok(text) => return Ok(text),
                Err(error) if attempt < self.retries => {
                    attempt += 1;
                    log::warn!(
                        "fetching {} failed ({}), retry {}/{}",
                        verse.label(),
                        error,
                        attempt,
                        self.retries
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
