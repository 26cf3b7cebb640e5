//! Page regeneration cache.
//!
//! Holds the last good props for each route, serialized as JSON, and decides
//! when a route must be regenerated:
//!
//! | State | Condition | Action |
//! |-------|-----------|--------|
//! | fresh | age < revalidate, or page is static | serve cached props |
//! | missing | no entry | regenerate; errors go to the caller |
//! | stale | age >= revalidate, or invalidated | regenerate; on error keep serving the stale props |
//!
//! Routes regenerate independently. Two requests racing on the same stale route
//! may both regenerate; the later write wins.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use crate::error::PageError;
use crate::pages::Page;

/// One cached page.
#[derive(Clone, Debug)]
pub struct CachedPage {
    /// Serialized [`Page`].
    pub json: String,
    pub generated_at: DateTime<Utc>,
    pub revalidate: Option<Duration>,
    /// Set by [`PageCache::invalidate`]; forces regeneration on next request.
    pub invalidated: bool,
}

impl CachedPage {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        if self.invalidated {
            return false;
        }
        match self.revalidate {
            None => true,
            Some(interval) => {
                let age = (now - self.generated_at).to_std().unwrap_or_default();
                age < interval
            }
        }
    }
}

/// Shared map from route path to its last generated page.
#[derive(Clone, Debug, Default)]
pub struct PageCache {
    entries: Arc<RwLock<HashMap<String, CachedPage>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `key` from cache, regenerating it when missing or stale.
    pub async fn get_or_regenerate<P, F, Fut>(
        &self,
        key: &str,
        regenerate: F,
    ) -> Result<Page<P>, PageError>
    where
        P: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Page<P>, PageError>>,
    {
        let cached = self.entries.read().await.get(key).cloned();

        let stale = match cached {
            Some(entry) if entry.is_fresh(Utc::now()) => match serde_json::from_str(&entry.json) {
                Ok(page) => {
                    tracing::debug!(key = %key, generated_at = %entry.generated_at, "page cache hit");
                    return Ok(page);
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "failed to deserialize cached page");
                    None
                }
            },
            other => other,
        };

        tracing::debug!(key = %key, stale = stale.is_some(), "regenerating page");
        match regenerate().await {
            Ok(page) => {
                self.store(key, &page).await;
                Ok(page)
            }
            Err(err) => {
                let fallback = stale
                    .as_ref()
                    .and_then(|entry| serde_json::from_str::<Page<P>>(&entry.json).ok());
                match fallback {
                    Some(page) => {
                        tracing::warn!(
                            key = %key,
                            error = %err,
                            "regeneration failed, serving stale page"
                        );
                        Ok(page)
                    }
                    None => Err(err),
                }
            }
        }
    }

    async fn store<P: Serialize>(&self, key: &str, page: &Page<P>) {
        match serde_json::to_string(page) {
            Ok(json) => {
                let entry = CachedPage {
                    json,
                    generated_at: Utc::now(),
                    revalidate: page.revalidate_after(),
                    invalidated: false,
                };
                self.entries.write().await.insert(key.to_string(), entry);
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to serialize page for cache");
            }
        }
    }

    /// Mark a route stale so the next request regenerates it. Returns whether
    /// the route had been generated.
    pub async fn invalidate(&self, key: &str) -> bool {
        match self.entries.write().await.get_mut(key) {
            Some(entry) => {
                entry.invalidated = true;
                true
            }
            None => false,
        }
    }

    pub async fn get(&self, key: &str) -> Option<CachedPage> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ClientError;

    fn upstream_down() -> PageError {
        PageError::Content(ClientError::Status("503 Service Unavailable".to_string()))
    }

    #[tokio::test]
    async fn fresh_pages_are_not_regenerated() {
        let cache = PageCache::new();

        let page = cache
            .get_or_regenerate("/a", || async { Ok(Page::revalidating(1, 3600)) })
            .await
            .unwrap();
        assert_eq!(page.props, 1);

        let page: Page<i32> = cache
            .get_or_regenerate("/a", || async {
                panic!("fresh page should not regenerate")
            })
            .await
            .unwrap();
        assert_eq!(page.props, 1);
    }

    #[tokio::test]
    async fn static_pages_never_go_stale() {
        let cache = PageCache::new();
        cache
            .get_or_regenerate("/s", || async { Ok(Page::fixed("x".to_string())) })
            .await
            .unwrap();

        let entry = cache.get("/s").await.unwrap();
        assert!(entry.is_fresh(Utc::now() + chrono::Duration::days(365)));
    }

    #[tokio::test]
    async fn stale_pages_are_regenerated() {
        let cache = PageCache::new();
        cache
            .get_or_regenerate("/a", || async { Ok(Page::revalidating(1, 0)) })
            .await
            .unwrap();

        let page = cache
            .get_or_regenerate("/a", || async { Ok(Page::revalidating(2, 0)) })
            .await
            .unwrap();
        assert_eq!(page.props, 2);
    }

    #[tokio::test]
    async fn failed_regeneration_serves_stale_page() {
        let cache = PageCache::new();
        cache
            .get_or_regenerate("/a", || async { Ok(Page::revalidating(1, 0)) })
            .await
            .unwrap();

        let page: Page<i32> = cache
            .get_or_regenerate("/a", || async { Err(upstream_down()) })
            .await
            .unwrap();
        assert_eq!(page.props, 1);
    }

    #[tokio::test]
    async fn failure_with_nothing_cached_propagates() {
        let cache = PageCache::new();
        let result: Result<Page<i32>, _> = cache
            .get_or_regenerate("/a", || async { Err(upstream_down()) })
            .await;
        assert!(matches!(result, Err(PageError::Content(_))));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn invalidate_forces_regeneration() {
        let cache = PageCache::new();
        cache
            .get_or_regenerate("/a", || async { Ok(Page::revalidating(1, 3600)) })
            .await
            .unwrap();

        assert!(cache.invalidate("/a").await);
        assert!(!cache.invalidate("/missing").await);

        let page = cache
            .get_or_regenerate("/a", || async { Ok(Page::revalidating(2, 3600)) })
            .await
            .unwrap();
        assert_eq!(page.props, 2);
        assert!(!cache.get("/a").await.unwrap().invalidated);
    }
}
