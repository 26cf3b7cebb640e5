//! HTTP client for the GraphQL content API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use super::{ContentSource, HomeData};
use crate::config::Config;
use crate::graphql::{self, Document};
use crate::models::{Bookmark, Episode, Post};

/// Content API errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content API returned {0}")]
    Status(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PostData {
    post: Option<Post>,
}

#[derive(Debug, Deserialize)]
struct PostsData {
    posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct EpisodesData {
    episodes: Vec<Episode>,
}

#[derive(Debug, Deserialize)]
struct BookmarksData {
    bookmarks: Vec<Bookmark>,
}

/// GraphQL client for the content API.
///
/// Constructed explicitly and shared through application state; there is no
/// process-wide instance.
#[derive(Debug, Clone)]
pub struct ContentClient {
    endpoint: String,
    token: Option<String>,
    client: Client,
}

impl ContentClient {
    /// Create with explicit configuration.
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token,
            client: Client::new(),
        }
    }

    /// Create from application config, applying its request timeout.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self {
            endpoint: config.content_api_url.clone(),
            token: config.content_api_token.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a query document and decode its `data` object.
    pub async fn query<T: DeserializeOwned>(&self, document: &Document) -> Result<T, ClientError> {
        let mut req = self.client.post(&self.endpoint).json(&document.to_request());
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        let root = document
            .fields()
            .first()
            .map(|f| f.name())
            .unwrap_or_default();
        tracing::debug!(endpoint = %self.endpoint, root, "sending content query");

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(ClientError::Status(format!("{}: {}", status, text.trim())));
        }

        decode_envelope(&body)
    }
}

/// Unwrap a GraphQL response body into its `data`, surfacing `errors` first.
fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    let envelope: Envelope<T> =
        serde_json::from_slice(body).map_err(|e| ClientError::Malformed(e.to_string()))?;

    if !envelope.errors.is_empty() {
        let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(ClientError::GraphQl(messages.join("; ")));
    }

    envelope
        .data
        .ok_or_else(|| ClientError::Malformed("response has no data".to_string()))
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn posts(&self) -> Result<Vec<Post>, ClientError> {
        let data: PostsData = self.query(&graphql::posts()).await?;
        Ok(data.posts)
    }

    async fn post(&self, slug: &str) -> Result<Option<Post>, ClientError> {
        let data: PostData = self.query(&graphql::post(slug)).await?;
        Ok(data.post)
    }

    async fn episodes(&self) -> Result<Vec<Episode>, ClientError> {
        let data: EpisodesData = self.query(&graphql::episodes()).await?;
        Ok(data.episodes)
    }

    async fn bookmarks(&self) -> Result<Vec<Bookmark>, ClientError> {
        let data: BookmarksData = self.query(&graphql::bookmarks()).await?;
        Ok(data.bookmarks)
    }

    async fn home(&self) -> Result<HomeData, ClientError> {
        self.query(&graphql::home()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_data_object() {
        let body = br#"{"data": {"post": null}}"#;
        let data: PostData = decode_envelope(body).unwrap();
        assert!(data.post.is_none());
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let body = br#"{"data": null, "errors": [{"message": "a"}, {"message": "b"}]}"#;
        let err = decode_envelope::<PostData>(body).unwrap_err();
        assert!(matches!(err, ClientError::GraphQl(ref m) if m == "a; b"));
    }

    #[test]
    fn missing_data_is_malformed() {
        let err = decode_envelope::<PostsData>(br#"{}"#).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let err = decode_envelope::<PostsData>(br#"{"data": {"posts": 3}}"#).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = decode_envelope::<PostsData>(b"<html>").unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }
}
