use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

use crate::config::HarnessConfig;
use crate::error::{AppError, Result};

/// Credential header expected by the listings endpoint.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Query parameters accepted by the listings endpoint. `start` and `limit`
/// are signed so boundary probes can send deliberately invalid values.
#[derive(Debug, Clone)]
pub struct ListingsQuery {
    pub start: i64,
    pub limit: i64,
    pub convert: &'static str,
}

impl ListingsQuery {
    pub fn new(start: i64, limit: i64, convert: &'static str) -> Self {
        Self {
            start,
            limit,
            convert,
        }
    }
}

/// Thin wrapper around a shared `reqwest::Client` that knows how to call the
/// listings endpoint with the harness credential and timeouts.
pub struct ApiClient {
    client: Client,
    config: HarnessConfig,
}

impl ApiClient {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Issue one GET against the listings endpoint with the configured
    /// credential and the regular request timeout.
    pub async fn listings(&self, query: &ListingsQuery) -> Result<Value> {
        self.listings_with(query, &self.config.api_key, self.config.request_timeout)
            .await
    }

    /// Same request with an explicit credential and timeout. Used by probes
    /// that deliberately present a bad key or expect rejection quickly.
    pub async fn listings_with(
        &self,
        query: &ListingsQuery,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Value> {
        let response = self
            .client
            .get(self.config.listings_url())
            .headers(base_headers())
            .header(API_KEY_HEADER, api_key)
            .query(&[
                ("start", query.start.to_string()),
                ("limit", query.limit.to_string()),
                ("convert", query.convert.to_string()),
            ])
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Http { status, body });
        }
        if body.is_empty() {
            return Err(AppError::message("empty response body from endpoint"));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
