use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved external link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: Option<String>,
    pub url: String,
    pub host: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Bookmark {
    /// Title to show, falling back to the URL for untitled links.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.url)
    }
}
