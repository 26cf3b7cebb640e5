//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Default bind address for local development.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default content API endpoint.
const DEFAULT_CONTENT_API_URL: &str = "http://localhost:4000/graphql";

/// Ranked story id listings.
const DEFAULT_HN_API_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Stories with their comment trees already nested.
const DEFAULT_HN_ITEM_API_URL: &str = "https://api.hnpwa.com/v0";

/// One page of a listing on news.ycombinator.com.
pub const DEFAULT_HN_STORY_LIMIT: usize = 30;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g. "0.0.0.0:3000").
    pub bind_addr: String,
    /// GraphQL endpoint of the content API.
    pub content_api_url: String,
    /// Bearer token for the content API, if it requires one.
    pub content_api_token: Option<String>,
    pub hn_api_url: String,
    pub hn_item_api_url: String,
    /// How many stories of a listing to expand.
    pub hn_story_limit: usize,
    /// Timeout applied to every upstream request.
    pub http_timeout: Duration,
    /// Bearer token for on-demand revalidation. Unset disables the endpoint.
    pub revalidate_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `HOMEPAGE_BIND_ADDR` (default: "127.0.0.1:3000")
    /// - `CONTENT_API_URL` (default: "http://localhost:4000/graphql")
    /// - `CONTENT_API_TOKEN`
    /// - `HN_API_URL` (default: the official Firebase API)
    /// - `HN_ITEM_API_URL` (default: hnpwa)
    /// - `HN_STORY_LIMIT` (default: 30)
    /// - `HTTP_TIMEOUT_SECS` (default: 10)
    /// - `REVALIDATE_TOKEN`
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("HOMEPAGE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let content_api_url = std::env::var("CONTENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_CONTENT_API_URL.to_string());

        let content_api_token = std::env::var("CONTENT_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let hn_api_url = std::env::var("HN_API_URL")
            .unwrap_or_else(|_| DEFAULT_HN_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let hn_item_api_url = std::env::var("HN_ITEM_API_URL")
            .unwrap_or_else(|_| DEFAULT_HN_ITEM_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let hn_story_limit = match std::env::var("HN_STORY_LIMIT") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("HN_STORY_LIMIT must be a number: {e}"))?,
            Err(_) => DEFAULT_HN_STORY_LIMIT,
        };

        let timeout_secs = match std::env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("HTTP_TIMEOUT_SECS must be a number: {e}"))?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let revalidate_token = std::env::var("REVALIDATE_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        tracing::info!(
            bind_addr = %bind_addr,
            content_api_url = %content_api_url,
            content_api_auth = content_api_token.is_some(),
            hn_api_url = %hn_api_url,
            hn_item_api_url = %hn_item_api_url,
            hn_story_limit,
            timeout_secs,
            on_demand_revalidation = revalidate_token.is_some(),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            content_api_url,
            content_api_token,
            hn_api_url,
            hn_item_api_url,
            hn_story_limit,
            http_timeout: Duration::from_secs(timeout_secs),
            revalidate_token,
        })
    }

    /// Configuration pointing every upstream at `base_url`, for tests and local stubs.
    pub fn for_upstream(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            content_api_url: format!("{}/graphql", base),
            content_api_token: None,
            hn_api_url: base.to_string(),
            hn_item_api_url: base.to_string(),
            hn_story_limit: DEFAULT_HN_STORY_LIMIT,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            revalidate_token: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            content_api_url: DEFAULT_CONTENT_API_URL.to_string(),
            content_api_token: None,
            hn_api_url: DEFAULT_HN_API_URL.to_string(),
            hn_item_api_url: DEFAULT_HN_ITEM_API_URL.to_string(),
            hn_story_limit: DEFAULT_HN_STORY_LIMIT,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            revalidate_token: None,
        }
    }
}
