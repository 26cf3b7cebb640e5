//! Shared fixtures and in-memory sources for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use homepage::content::{ClientError, ContentSource, HomeData};
use homepage::hn::{FeedError, HnCategory, HnFeed};
use homepage::models::*;

pub fn post(slug: &str) -> Post {
    Post {
        id: format!("id-{}", slug),
        title: format!("Post {}", slug),
        slug: slug.to_string(),
        html: Some(format!("<p>Body of {}</p>", slug)),
        excerpt: Some(format!("About {}", slug)),
        published_at: None,
        updated_at: None,
        feature_image: None,
    }
}

pub fn episode(id: &str) -> Episode {
    Episode {
        id: id.to_string(),
        title: format!("Episode {}", id),
        description: None,
        long_description: None,
        published_at: None,
        token: None,
        legacy_id: None,
    }
}

pub fn bookmark(id: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: Some(format!("Bookmark {}", id)),
        url: format!("https://example.com/{}", id),
        host: Some("example.com".to_string()),
        description: None,
        image: None,
        created_at: None,
    }
}

pub fn comment(id: u64, level: u32, comments: Vec<HnComment>) -> HnComment {
    HnComment {
        id,
        level,
        user: Some(format!("user{}", id)),
        time: 1_600_000_000 + id as i64,
        time_ago: "1 hour ago".to_string(),
        content: format!("<p>comment {}</p>", id),
        deleted: false,
        comments,
    }
}

pub fn hn_post(id: u64, comments: Vec<HnComment>) -> HnPost {
    HnPost {
        id,
        title: format!("Story {}", id),
        points: Some(10),
        user: Some("poster".to_string()),
        time: 1_600_000_000,
        time_ago: "2 hours ago".to_string(),
        url: format!("https://example.com/story/{}", id),
        domain: Some("example.com".to_string()),
        content: String::new(),
        comments_count: homepage::models::count_comments(&comments) as u32,
        comments,
    }
}

fn unavailable() -> ClientError {
    ClientError::Status("503 Service Unavailable: upstream down".to_string())
}

/// Content source backed by fixed vectors. Can be switched to failing mid-test.
#[derive(Default)]
pub struct StubContent {
    pub posts: Vec<Post>,
    pub episodes: Vec<Episode>,
    pub bookmarks: Vec<Bookmark>,
    pub failing: AtomicBool,
    pub calls: AtomicUsize,
}

impl StubContent {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        let stub = Self::default();
        stub.set_failing(true);
        stub
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContentSource for StubContent {
    async fn posts(&self) -> Result<Vec<Post>, ClientError> {
        self.enter()?;
        Ok(self.posts.clone())
    }

    async fn post(&self, slug: &str) -> Result<Option<Post>, ClientError> {
        self.enter()?;
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn episodes(&self) -> Result<Vec<Episode>, ClientError> {
        self.enter()?;
        Ok(self.episodes.clone())
    }

    async fn bookmarks(&self) -> Result<Vec<Bookmark>, ClientError> {
        self.enter()?;
        Ok(self.bookmarks.clone())
    }

    async fn home(&self) -> Result<HomeData, ClientError> {
        self.enter()?;
        Ok(HomeData {
            posts: self.posts.clone(),
            episodes: self.episodes.clone(),
        })
    }
}

/// Feed returning the same posts for every category.
#[derive(Default)]
pub struct StubFeed {
    pub posts: Vec<HnPost>,
    pub failing: AtomicBool,
    pub calls: AtomicUsize,
}

impl StubFeed {
    pub fn with_posts(posts: Vec<HnPost>) -> Self {
        Self {
            posts,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HnFeed for StubFeed {
    async fn posts(&self, _category: HnCategory) -> Result<Vec<HnPost>, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(FeedError::Status("502 Bad Gateway for topstories.json".to_string()));
        }
        Ok(self.posts.clone())
    }
}

pub fn sample_feed() -> StubFeed {
    StubFeed::with_posts(vec![
        hn_post(
            30,
            vec![
                comment(301, 0, vec![comment(302, 1, vec![comment(303, 2, vec![])])]),
                comment(304, 0, vec![]),
            ],
        ),
        hn_post(10, vec![]),
        hn_post(20, vec![comment(201, 0, vec![])]),
    ])
}

pub fn sample_content() -> StubContent {
    StubContent {
        posts: vec![post("first"), post("second"), post("third")],
        episodes: vec![episode("e1"), episode("e2")],
        bookmarks: vec![bookmark("b1")],
        ..Default::default()
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
