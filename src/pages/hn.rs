use serde::{Deserialize, Serialize};

use super::{Page, HN_REVALIDATE_SECS};
use crate::error::PageError;
use crate::hn::{HnCategory, HnFeed};
use crate::models::HnPost;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HnProps {
    pub category: HnCategory,
    pub posts: Vec<HnPost>,
}

/// Hacker News listing in upstream rank order, comments included.
pub async fn hn(feed: &dyn HnFeed, category: HnCategory) -> Result<Page<HnProps>, PageError> {
    let posts = feed.posts(category).await?;
    tracing::debug!(%category, posts = posts.len(), "assembled hacker news page");
    Ok(Page::revalidating(HnProps { category, posts }, HN_REVALIDATE_SECS))
}
