//! Page assemblers.
//!
//! Each route has an async function that fetches from the sources it is handed,
//! shapes the result into props, and declares how long those props stay fresh.
//! Assemblers never retry and never swallow errors: a failed fetch returns `Err`
//! and the regeneration cache decides what the visitor sees.

mod about;
mod bookmarks;
mod hn;
mod podcast;
mod security;
mod writing;

pub use about::*;
pub use bookmarks::*;
pub use hn::*;
pub use podcast::*;
pub use security::*;
pub use writing::*;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::ContentSource;
use crate::error::PageError;
use crate::hn::{HnCategory, HnFeed};

const HOUR: u64 = 60 * 60;

pub const ABOUT_REVALIDATE_SECS: u64 = HOUR;
pub const WRITING_REVALIDATE_SECS: u64 = HOUR;
pub const POST_REVALIDATE_SECS: u64 = HOUR;
pub const PODCAST_REVALIDATE_SECS: u64 = HOUR;
pub const BOOKMARKS_REVALIDATE_SECS: u64 = HOUR;
pub const HN_REVALIDATE_SECS: u64 = 4 * HOUR;

/// Assembled props plus the regeneration directive for the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<P> {
    pub props: P,
    /// Seconds until the page may be regenerated. `None` for fully static pages.
    pub revalidate: Option<u64>,
}

impl<P> Page<P> {
    pub fn revalidating(props: P, secs: u64) -> Self {
        Self {
            props,
            revalidate: Some(secs),
        }
    }

    pub fn fixed(props: P) -> Self {
        Self {
            props,
            revalidate: None,
        }
    }

    pub fn revalidate_after(&self) -> Option<Duration> {
        self.revalidate.map(Duration::from_secs)
    }
}

/// Every page the site can assemble.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    About,
    Writing,
    Post(String),
    Podcast,
    Bookmarks,
    Hn(HnCategory),
    Security,
}

impl Route {
    /// Parse a site path such as `/writing/hello` or `/hn/ask`.
    pub fn parse(path: &str) -> Result<Self, PageError> {
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] | ["about"] => Ok(Self::About),
            ["writing"] => Ok(Self::Writing),
            ["writing", slug] => Ok(Self::Post((*slug).to_string())),
            ["podcast"] => Ok(Self::Podcast),
            ["bookmarks"] => Ok(Self::Bookmarks),
            ["hn"] => Ok(Self::Hn(HnCategory::Top)),
            ["hn", category] => Ok(Self::Hn(category.parse()?)),
            ["security"] => Ok(Self::Security),
            _ => Err(PageError::NotFound(path.to_string())),
        }
    }

    /// Canonical path, also the regeneration cache key.
    pub fn path(&self) -> String {
        match self {
            Self::About => "/".to_string(),
            Self::Writing => "/writing".to_string(),
            Self::Post(slug) => format!("/writing/{}", slug),
            Self::Podcast => "/podcast".to_string(),
            Self::Bookmarks => "/bookmarks".to_string(),
            Self::Hn(category) => format!("/hn/{}", category),
            Self::Security => "/security".to_string(),
        }
    }

    /// Declared regeneration interval in seconds.
    pub fn revalidate_secs(&self) -> Option<u64> {
        match self {
            Self::About => Some(ABOUT_REVALIDATE_SECS),
            Self::Writing => Some(WRITING_REVALIDATE_SECS),
            Self::Post(_) => Some(POST_REVALIDATE_SECS),
            Self::Podcast => Some(PODCAST_REVALIDATE_SECS),
            Self::Bookmarks => Some(BOOKMARKS_REVALIDATE_SECS),
            Self::Hn(_) => Some(HN_REVALIDATE_SECS),
            Self::Security => None,
        }
    }

    /// Run the route's assembler and return the page as JSON.
    pub async fn assemble_json(
        &self,
        content: &dyn ContentSource,
        feed: &dyn HnFeed,
    ) -> Result<serde_json::Value, PageError> {
        let value = match self {
            Self::About => serde_json::to_value(about(content).await?),
            Self::Writing => serde_json::to_value(writing(content).await?),
            Self::Post(slug) => serde_json::to_value(post(content, slug).await?),
            Self::Podcast => serde_json::to_value(podcast(content).await?),
            Self::Bookmarks => serde_json::to_value(bookmarks(content).await?),
            Self::Hn(category) => serde_json::to_value(hn(feed, *category).await?),
            Self::Security => serde_json::to_value(security()),
        };
        value.map_err(|e| PageError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/").unwrap(), Route::About);
        assert_eq!(Route::parse("/writing/").unwrap(), Route::Writing);
        assert_eq!(
            Route::parse("/writing/hello-world").unwrap(),
            Route::Post("hello-world".to_string())
        );
        assert_eq!(Route::parse("/hn").unwrap(), Route::Hn(HnCategory::Top));
        assert_eq!(Route::parse("hn/show").unwrap(), Route::Hn(HnCategory::Show));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert!(matches!(Route::parse("/nope"), Err(PageError::NotFound(_))));
        assert!(matches!(
            Route::parse("/writing/a/b"),
            Err(PageError::NotFound(_))
        ));
    }

    #[test]
    fn unknown_hn_listing_is_a_feed_error() {
        assert!(matches!(Route::parse("/hn/frontpage"), Err(PageError::Feed(_))));
    }

    #[test]
    fn path_round_trips_through_parse() {
        let routes = [
            Route::About,
            Route::Writing,
            Route::Post("x".to_string()),
            Route::Podcast,
            Route::Bookmarks,
            Route::Hn(HnCategory::Jobs),
            Route::Security,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn revalidation_intervals() {
        assert_eq!(Route::About.revalidate_secs(), Some(3600));
        assert_eq!(Route::Hn(HnCategory::Top).revalidate_secs(), Some(14400));
        assert_eq!(Route::Security.revalidate_secs(), None);
    }
}
