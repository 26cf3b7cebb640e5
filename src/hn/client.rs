//! HTTP implementation of [`HnFeed`].

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{FeedError, HnCategory, HnFeed};
use crate::config::{Config, DEFAULT_HN_STORY_LIMIT};
use crate::models::HnPost;

/// Reads ranked ids from the official API, then expands each story with its
/// nested comments from the item endpoint.
#[derive(Debug, Clone)]
pub struct HnClient {
    listing_base: String,
    item_base: String,
    story_limit: usize,
    client: Client,
}

impl HnClient {
    pub fn new(listing_base: impl Into<String>, item_base: impl Into<String>) -> Self {
        Self {
            listing_base: listing_base.into(),
            item_base: item_base.into(),
            story_limit: DEFAULT_HN_STORY_LIMIT,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self {
            listing_base: config.hn_api_url.clone(),
            item_base: config.hn_item_api_url.clone(),
            story_limit: config.hn_story_limit,
            client,
        })
    }

    pub fn with_story_limit(mut self, limit: usize) -> Self {
        self.story_limit = limit;
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(format!("{} for {}", status, what)));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FeedError::Decode {
            what: what.to_string(),
            message: e.to_string(),
        })
    }

    /// Ranked story ids for a listing, truncated to the story limit.
    pub async fn story_ids(&self, category: HnCategory) -> Result<Vec<u64>, FeedError> {
        let url = format!("{}/{}", self.listing_base, category.listing_file());
        let mut ids: Vec<u64> = self.get_json(&url, category.listing_file()).await?;
        ids.truncate(self.story_limit);
        Ok(ids)
    }

    /// One story with its comment tree. `None` when the item no longer exists.
    pub async fn story(&self, id: u64) -> Result<Option<HnPost>, FeedError> {
        let url = format!("{}/item/{}.json", self.item_base, id);
        self.get_json(&url, &format!("item {}", id)).await
    }
}

#[async_trait]
impl HnFeed for HnClient {
    async fn posts(&self, category: HnCategory) -> Result<Vec<HnPost>, FeedError> {
        let ids = self.story_ids(category).await?;
        tracing::debug!(%category, count = ids.len(), "expanding hacker news listing");

        let stories = try_join_all(ids.iter().map(|&id| self.story(id))).await?;

        let total = stories.len();
        let posts: Vec<HnPost> = stories.into_iter().flatten().collect();
        if posts.len() < total {
            tracing::debug!(
                %category,
                missing = total - posts.len(),
                "skipped stories that no longer exist"
            );
        }

        Ok(posts)
    }
}
