use serde::{Deserialize, Serialize};

const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

/// A story from a Hacker News listing, with its full comment tree.
///
/// The shape follows the item endpoint of the feed API. Ask/Show posts carry
/// their text in `content` and a site-relative `url`; see [`HnPost::link`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HnPost {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub user: Option<String>,
    /// Unix seconds.
    pub time: i64,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub comments: Vec<HnComment>,
}

impl HnPost {
    /// Discussion page on news.ycombinator.com.
    pub fn permalink(&self) -> String {
        format!("{}{}", ITEM_URL, self.id)
    }

    /// Outbound link for the story, or the discussion page for text posts.
    pub fn link(&self) -> String {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            self.url.clone()
        } else {
            self.permalink()
        }
    }
}

/// A comment node. Replies live in `comments` and are owned by this node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HnComment {
    pub id: u64,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub comments: Vec<HnComment>,
}

impl HnComment {
    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.comments.iter().map(HnComment::subtree_len).sum::<usize>()
    }
}

/// Total number of comment nodes across a forest.
pub fn count_comments(comments: &[HnComment]) -> usize {
    comments.iter().map(HnComment::subtree_len).sum()
}
