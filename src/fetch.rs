use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

use crate::error::AnalysisError;

/// Header sent with every request so pages served to browsers are served to us.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Blocking HTTP fetcher for page content.
///
/// One client is built per process with the user agent, timeout, and redirect
/// policy baked in; each analysis issues a single GET through it.
pub struct Fetcher {
    client: Client,
    timeout_secs: u64,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(timeout)
            .redirect(Policy::limited(10))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            timeout_secs: timeout.as_secs(),
        })
    }

    /// Fetch the body of `url` as UTF-8 text.
    ///
    /// Non-200 responses are failures, as are timeouts and transport errors.
    /// The body is decoded as UTF-8 unconditionally, replacing invalid
    /// sequences, regardless of what the Content-Type header claims.
    pub fn fetch_text(&self, url: &str) -> Result<String, AnalysisError> {
        let parsed = validate_url(url)?;
        let start_time = Instant::now();
        info!(
            action = "start",
            component = "fetch",
            url = url,
            host = parsed.host_str().unwrap_or(""),
            "Fetching page"
        );

        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                AnalysisError::Timeout {
                    url: url.to_string(),
                    seconds: self.timeout_secs,
                }
            } else {
                AnalysisError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AnalysisError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|e| {
            if e.is_timeout() {
                AnalysisError::Timeout {
                    url: url.to_string(),
                    seconds: self.timeout_secs,
                }
            } else {
                AnalysisError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        let fetch_time = start_time.elapsed();
        debug!(
            action = "complete",
            component = "fetch",
            url = url,
            bytes = bytes.len(),
            duration_ms = fetch_time.as_millis(),
            "Page fetched"
        );
        Ok(body)
    }
}

/// Accept only non-empty http/https URLs.
pub fn validate_url(url: &str) -> Result<Url, AnalysisError> {
    if url.trim().is_empty() {
        return Err(AnalysisError::InvalidUrl {
            url: url.to_string(),
            reason: "URL is empty".to_string(),
        });
    }

    let parsed = Url::parse(url).map_err(|e| AnalysisError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if !["http", "https"].contains(&parsed.scheme()) {
        return Err(AnalysisError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(parsed)
}
