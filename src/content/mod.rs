//! Access to the GraphQL content API.
//!
//! [`ContentSource`] is the seam page assemblers depend on. [`ContentClient`]
//! implements it over HTTP; tests substitute in-memory sources.

mod client;

pub use client::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{Bookmark, Episode, Post};

/// Result of the `home` query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeData {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// Read-only access to site content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn posts(&self) -> Result<Vec<Post>, ClientError>;

    /// A single post. `Ok(None)` when the API knows no post with this slug.
    async fn post(&self, slug: &str) -> Result<Option<Post>, ClientError>;

    async fn episodes(&self) -> Result<Vec<Episode>, ClientError>;

    async fn bookmarks(&self) -> Result<Vec<Bookmark>, ClientError>;

    async fn home(&self) -> Result<HomeData, ClientError>;
}
