//! Page assembler tests against in-memory sources.

mod common;

use common::*;
use homepage::hn::HnCategory;
use homepage::pages::{self, Route};
use homepage::PageError;

mod about {
    use super::*;

    #[tokio::test]
    async fn keeps_every_post_in_order() {
        let slugs: Vec<String> = (0..7).map(|i| format!("post-{}", i)).collect();
        let content = StubContent::with_posts(slugs.iter().map(|s| post(s)).collect());

        let page = pages::about(&content).await.unwrap();

        assert_eq!(page.props.data.posts.len(), 7);
        let got: Vec<&str> = page.props.data.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(got, slugs.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn includes_episodes_and_summaries() {
        let page = pages::about(&sample_content()).await.unwrap();
        assert_eq!(page.props.data.episodes.len(), 2);
        assert!(!page.props.summaries.is_empty());
    }

    #[tokio::test]
    async fn issues_a_single_content_request() {
        let content = sample_content();
        pages::about(&content).await.unwrap();
        assert_eq!(content.call_count(), 1);
    }

    #[tokio::test]
    async fn revalidates_hourly() {
        let page = pages::about(&sample_content()).await.unwrap();
        assert_eq!(page.revalidate, Some(3600));
    }

    #[tokio::test]
    async fn fails_instead_of_returning_empty_props() {
        let result = pages::about(&StubContent::failing()).await;
        assert!(matches!(result, Err(PageError::Content(_))));
    }
}

mod writing {
    use super::*;

    #[tokio::test]
    async fn lists_posts() {
        let page = pages::writing(&sample_content()).await.unwrap();
        assert_eq!(page.props.posts.len(), 3);
        assert_eq!(page.revalidate, Some(pages::WRITING_REVALIDATE_SECS));
    }

    #[tokio::test]
    async fn finds_post_by_slug() {
        let page = pages::post(&sample_content(), "second").await.unwrap();
        assert_eq!(page.props.post.title, "Post second");
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let result = pages::post(&sample_content(), "missing").await;
        assert!(matches!(result, Err(PageError::NotFound(_))));
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let result = pages::post(&StubContent::failing(), "first").await;
        assert!(matches!(result, Err(PageError::Content(_))));
    }
}

mod podcast_and_bookmarks {
    use super::*;

    #[tokio::test]
    async fn podcast_lists_episodes() {
        let page = pages::podcast(&sample_content()).await.unwrap();
        let ids: Vec<&str> = page.props.episodes.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[tokio::test]
    async fn bookmarks_lists_bookmarks() {
        let page = pages::bookmarks(&sample_content()).await.unwrap();
        assert_eq!(page.props.bookmarks.len(), 1);
    }

    #[tokio::test]
    async fn bookmarks_failure_propagates() {
        assert!(pages::bookmarks(&StubContent::failing()).await.is_err());
    }
}

mod hacker_news {
    use super::*;

    #[tokio::test]
    async fn preserves_story_order() {
        let feed = sample_feed();
        let page = pages::hn(&feed, HnCategory::Top).await.unwrap();
        let ids: Vec<u64> = page.props.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[tokio::test]
    async fn comment_trees_survive_unchanged() {
        let feed = sample_feed();
        let page = pages::hn(&feed, HnCategory::Top).await.unwrap();
        assert_eq!(page.props.posts, feed.posts);
        let nested = &page.props.posts[0].comments[0].comments[0].comments[0];
        assert_eq!(nested.id, 303);
    }

    #[tokio::test]
    async fn props_round_trip_through_json() {
        let page = pages::hn(&sample_feed(), HnCategory::Ask).await.unwrap();
        let json = serde_json::to_string(&page).unwrap();
        let back: pages::Page<pages::HnProps> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }

    #[tokio::test]
    async fn revalidates_every_four_hours() {
        let page = pages::hn(&sample_feed(), HnCategory::Top).await.unwrap();
        assert_eq!(page.revalidate, Some(14400));
    }

    #[tokio::test]
    async fn feed_failure_propagates() {
        let feed = sample_feed();
        feed.failing.store(true, std::sync::atomic::Ordering::SeqCst);
        let result = pages::hn(&feed, HnCategory::Top).await;
        assert!(matches!(result, Err(PageError::Feed(_))));
    }
}

mod security {
    use super::*;

    #[test]
    fn is_static() {
        let page = pages::security();
        assert!(page.revalidate.is_none());
        assert!(page.props.checklist.iter().all(|item| !item.title.is_empty()));
    }
}

mod routes {
    use super::*;

    #[tokio::test]
    async fn assembles_any_route_to_json() {
        let content = sample_content();
        let feed = sample_feed();

        let about = Route::About.assemble_json(&content, &feed).await.unwrap();
        assert_eq!(about["revalidate"], 3600);
        assert_eq!(about["props"]["data"]["posts"].as_array().unwrap().len(), 3);

        let hn = Route::Hn(HnCategory::Top)
            .assemble_json(&content, &feed)
            .await
            .unwrap();
        assert_eq!(hn["props"]["category"], "top");
        assert_eq!(hn["revalidate"], 14400);

        let security = Route::Security.assemble_json(&content, &feed).await.unwrap();
        assert!(security["revalidate"].is_null());
    }

    #[tokio::test]
    async fn missing_post_route_is_not_found() {
        let result = Route::Post("nope".to_string())
            .assemble_json(&sample_content(), &sample_feed())
            .await;
        assert!(matches!(result, Err(PageError::NotFound(_))));
    }
}
