use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of writing served by the content API.
///
/// Posts are identified by `slug`, which is also the path segment under `/writing`.
/// `html` is the already-rendered body and is emitted into the page unescaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub html: Option<String>,
    pub excerpt: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub feature_image: Option<String>,
}

impl Post {
    /// Long-form publish date, e.g. "March 4, 2021".
    pub fn published_label(&self) -> Option<String> {
        self.published_at
            .map(|at| at.format("%B %-d, %Y").to_string())
    }
}
