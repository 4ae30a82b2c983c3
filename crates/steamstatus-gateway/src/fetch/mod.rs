//! Outbound page fetcher.
//!
//! One GET per call with the configured `User-Agent` and `Accept-Language`.
//! No retries: a non-2xx status becomes [`SteamStatusError::Fetch`], anything
//! that never produced a response (DNS, connect, timeout, body read) becomes
//! [`SteamStatusError::Transport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};

use steamstatus_core::error::{Result, SteamStatusError};

use crate::config::FetchSection;

/// Source of raw page text. The aggregator only sees this trait.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// `reqwest`-backed fetcher shared by every request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(cfg: &FetchSection) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let lang = HeaderValue::from_str(&cfg.accept_language).map_err(|e| {
            SteamStatusError::BadConfig(format!("fetch.accept_language is not a valid header: {e}"))
        })?;
        headers.insert(ACCEPT_LANGUAGE, lang);

        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| SteamStatusError::BadConfig(format!("http client build failed: {e}")))?;

        Ok(Self { client })
    }
}

fn transport(url: &str, e: reqwest::Error) -> SteamStatusError {
    SteamStatusError::Transport {
        url: url.to_string(),
        reason: e.to_string(),
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[tracing::instrument(level = "debug", skip(self), err(Display, level = "debug"))]
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SteamStatusError::Fetch {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| transport(url, e))?;
        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
