//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::cache::PageCache;
use crate::config::Config;
use crate::content::{ClientError, ContentClient, ContentSource};
use crate::hn::{FeedError, HnClient, HnFeed};

/// Sources, configuration and the regeneration cache.
///
/// Sources are trait objects so tests can hand in stubs; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    pub feed: Arc<dyn HnFeed>,
    pub cache: PageCache,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, content: Arc<dyn ContentSource>, feed: Arc<dyn HnFeed>) -> Self {
        Self {
            content,
            feed,
            cache: PageCache::new(),
            config: Arc::new(config),
        }
    }

    /// State backed by the real HTTP clients described by `config`.
    pub fn from_config(config: Config) -> Result<Self, StateError> {
        let content = ContentClient::from_config(&config)?;
        let feed = HnClient::from_config(&config)?;
        tracing::info!(
            content_api = %content.endpoint(),
            hn_story_limit = config.hn_story_limit,
            "application state initialized"
        );
        Ok(Self::new(config, Arc::new(content), Arc::new(feed)))
    }
}

/// Failure to build the upstream clients.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Content(#[from] ClientError),
    #[error(transparent)]
    Feed(#[from] FeedError),
}
