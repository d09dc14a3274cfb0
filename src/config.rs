use std::env;
use std::time::Duration;

/// Environment variable holding the production API credential.
pub const API_KEY_ENV: &str = "CMC_PRO_API_KEY";

/// Sandbox credential published by the API vendor. Not a secret; only valid
/// against the sandbox mirror.
pub const SANDBOX_API_KEY: &str = "911807e7-ac98-4332-8a65-0dbf689ce9aa";

/// Sandbox mirror of the production API. Returns synthetic or limited data.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.coinmarketcap.com/v1";

/// Endpoint path exercised by every test case.
pub const LISTINGS_PATH: &str = "/cryptocurrency/listings/latest";

/// Immutable harness settings, built once at startup and passed by reference
/// into the client and runner.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub base_url: String,
    pub api_key: String,
    /// Bound on every regular request.
    pub request_timeout: Duration,
    /// Shortened bound for deliberately-failing probes (invalid credential,
    /// boundary parameters).
    pub probe_timeout: Duration,
    /// Wall-clock threshold above which a timed request draws a warning.
    pub slow_threshold: Duration,
}

impl HarnessConfig {
    /// Build a config from the environment, falling back to the sandbox
    /// credential when `CMC_PRO_API_KEY` is unset.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_ENV).unwrap_or_else(|_| SANDBOX_API_KEY.to_string());
        Self::with_key(SANDBOX_BASE_URL, api_key)
    }

    pub fn with_key<B: Into<String>, K: Into<String>>(base_url: B, api_key: K) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            request_timeout: Duration::from_secs(30),
            probe_timeout: Duration::from_secs(10),
            slow_threshold: Duration::from_secs(10),
        }
    }

    /// Full URL of the listings endpoint.
    pub fn listings_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LISTINGS_PATH)
    }

    /// Redacted credential prefix for console banners.
    pub fn key_fingerprint(&self) -> String {
        let prefix: String = self.api_key.chars().take(8).collect();
        format!("{prefix}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_url_handles_trailing_slash() {
        let config = HarnessConfig::with_key("http://localhost:9000/v1/", "k");
        assert_eq!(
            config.listings_url(),
            "http://localhost:9000/v1/cryptocurrency/listings/latest"
        );
    }

    #[test]
    fn key_fingerprint_truncates() {
        let config = HarnessConfig::with_key(SANDBOX_BASE_URL, "abcdefgh-rest-of-key");
        assert_eq!(config.key_fingerprint(), "abcdefgh...");
    }
}
