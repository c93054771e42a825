use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use cvr_core::{AppConfig, Platform};

use crate::error::ScrapeError;

/// Connection settings for the scrape provider, injected at construction
/// time. Nothing in this crate reads the API key or base URL from process
/// globals.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ScrapeConfig {
    /// Builds the scrape settings from loaded application config.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.scrape_base_url.clone(),
            api_key: config.scrape_api_key.clone(),
            timeout_secs: config.scrape_timeout_secs,
            user_agent: config.scrape_user_agent.clone(),
        }
    }
}

/// HTTP client for the provider's profile and posts endpoints.
///
/// Each call is a single fixed-timeout fetch: rate limiting (429),
/// not-found (404), and other non-2xx responses surface as typed errors
/// and are never retried here. Callers degrade the affected report section
/// instead of failing the request.
pub struct ScrapeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ScrapeClient {
    /// Creates a `ScrapeClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidBaseUrl`] if the base URL does not
    /// parse, or [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: ScrapeConfig) -> Result<Self, ScrapeError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ScrapeError::InvalidBaseUrl {
            base_url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Fetches the raw profile payload for a creator URL.
    ///
    /// The response body is returned as an opaque [`Value`]; shape and key
    /// names vary by platform and provider API version.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::RateLimited`] — HTTP 429 (not retried).
    /// - [`ScrapeError::NotFound`] — HTTP 404.
    /// - [`ScrapeError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScrapeError::Http`] — network, TLS, or timeout failure.
    /// - [`ScrapeError::Deserialize`] — response body is not valid JSON.
    pub async fn fetch_profile(
        &self,
        platform: Platform,
        profile_url: &str,
    ) -> Result<Value, ScrapeError> {
        let url = self.endpoint_url(platform, "profile", profile_url, &[]);
        self.fetch_json(&url, &format!("{platform} profile")).await
    }

    /// Fetches the raw posts payload for a creator URL.
    ///
    /// `count` is how many recent posts to request; providers may return
    /// fewer. The envelope shape is provider-defined (bare array, `items`,
    /// `edges`, ...) and is resolved downstream.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_profile`].
    pub async fn fetch_posts(
        &self,
        platform: Platform,
        profile_url: &str,
        count: u32,
    ) -> Result<Value, ScrapeError> {
        let url = self.endpoint_url(
            platform,
            "posts",
            profile_url,
            &[("count", &count.to_string())],
        );
        self.fetch_json(&url, &format!("{platform} posts")).await
    }

    async fn fetch_json(&self, url: &str, context: &str) -> Result<Value, ScrapeError> {
        tracing::debug!(url, context, "fetching from scrape provider");

        let response = self
            .client
            .get(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(ScrapeError::RateLimited { retry_after_secs });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| ScrapeError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Builds `{base}/v1/{platform}/{resource}?url=...` with the profile URL
    /// and any extra pairs percent-encoded via `reqwest::Url`.
    fn endpoint_url(
        &self,
        platform: Platform,
        resource: &str,
        profile_url: &str,
        extra: &[(&str, &str)],
    ) -> String {
        let endpoint = format!("{}/v1/{}/{resource}", self.base_url, platform.as_str());
        match reqwest::Url::parse(&endpoint) {
            Ok(mut url) => {
                let mut pairs = url.query_pairs_mut();
                pairs.append_pair("url", profile_url);
                for (key, value) in extra {
                    pairs.append_pair(key, value);
                }
                drop(pairs);
                url.to_string()
            }
            // The base URL was validated in `new`, so this arm only fires on
            // a pathological platform/resource segment; fall back unencoded.
            Err(_) => {
                tracing::warn!(%endpoint, "endpoint is not a valid URL base; using raw query");
                format!("{endpoint}?url={profile_url}")
            }
        }
    }
}
