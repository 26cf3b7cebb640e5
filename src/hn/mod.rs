//! Hacker News feed adapter.
//!
//! Turns a listing category into an ordered list of [`HnPost`]s, each with its
//! comment tree rebuilt as owned [`HnComment`](crate::models::HnComment) nodes.
//! Order is the upstream ranking; nothing is re-ranked, filtered or deduplicated.

mod client;
mod thread;

pub use client::*;
pub use thread::*;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::HnPost;

/// Feed adapter errors.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Hacker News API returned {0}")]
    Status(String),

    #[error("Could not decode {what}: {message}")]
    Decode { what: String, message: String },

    #[error("Unknown listing: {0}")]
    UnknownCategory(String),
}

/// A ranked listing on Hacker News.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HnCategory {
    Top,
    New,
    Best,
    Ask,
    Show,
    Jobs,
}

impl HnCategory {
    pub const ALL: [HnCategory; 6] = [
        Self::Top,
        Self::New,
        Self::Best,
        Self::Ask,
        Self::Show,
        Self::Jobs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::New => "new",
            Self::Best => "best",
            Self::Ask => "ask",
            Self::Show => "show",
            Self::Jobs => "jobs",
        }
    }

    /// File name of the ranked id list on the official API.
    pub fn listing_file(&self) -> &'static str {
        match self {
            Self::Top => "topstories.json",
            Self::New => "newstories.json",
            Self::Best => "beststories.json",
            Self::Ask => "askstories.json",
            Self::Show => "showstories.json",
            Self::Jobs => "jobstories.json",
        }
    }
}

impl fmt::Display for HnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HnCategory {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FeedError::UnknownCategory(s.to_string()))
    }
}

/// Source of Hacker News listings.
#[async_trait]
pub trait HnFeed: Send + Sync {
    async fn posts(&self, category: HnCategory) -> Result<Vec<HnPost>, FeedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_category_name() {
        for category in HnCategory::ALL {
            assert_eq!(category.as_str().parse::<HnCategory>().unwrap(), category);
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "frontpage".parse::<HnCategory>().unwrap_err();
        assert!(matches!(err, FeedError::UnknownCategory(ref c) if c == "frontpage"));
    }

    #[test]
    fn jobs_listing_file_is_singular() {
        assert_eq!(HnCategory::Jobs.listing_file(), "jobstories.json");
    }
}
