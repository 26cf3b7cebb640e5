//! Views for the Hacker News mirror.

use maud::{html, Markup, PreEscaped};

use super::page_shell;
use crate::hn::HnCategory;
use crate::models::{HnComment, HnPost};
use crate::pages::HnProps;

/// Nesting depth beyond which replies are linked instead of rendered.
const MAX_DEPTH: u32 = 8;

fn category_nav(active: HnCategory) -> Markup {
    html! {
        div class="nav" {
            @for category in HnCategory::ALL {
                @if category == active {
                    strong { (category.as_str()) }
                } @else {
                    a href={ "/hn/" (category.as_str()) } { (category.as_str()) }
                }
            }
        }
    }
}

fn comment_tree(comments: &[HnComment], depth: u32) -> Markup {
    html! {
        ul class="comments" {
            @for comment in comments {
                li {
                    @if comment.deleted {
                        div class="meta" { "[deleted]" }
                    } @else {
                        div class="meta" {
                            (comment.user.as_deref().unwrap_or("[unknown]"))
                            " · " (comment.time_ago)
                        }
                        div class="comment-body" { (PreEscaped(&comment.content)) }
                    }
                    @if !comment.comments.is_empty() {
                        @if depth < MAX_DEPTH {
                            (comment_tree(&comment.comments, depth + 1))
                        } @else {
                            a class="meta" href={ "https://news.ycombinator.com/item?id=" (comment.id) } {
                                "Continue thread →"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn story(post: &HnPost) -> Markup {
    html! {
        li {
            a href=(post.link()) rel="noopener noreferrer" target="_blank" { (post.title) }
            div class="meta" {
                @if let Some(ref domain) = post.domain {
                    (domain) " · "
                }
                @if let Some(ref user) = post.user {
                    (user) " · "
                }
                (post.time_ago) " · "
                a href=(post.permalink()) { (post.comments_count) " comments" }
            }
            @if !post.content.is_empty() {
                div class="comment-body" { (PreEscaped(&post.content)) }
            }
            @if !post.comments.is_empty() {
                details {
                    summary class="meta" { "Read comments" }
                    (comment_tree(&post.comments, 0))
                }
            }
        }
    }
}

pub fn hn_page(props: &HnProps) -> Markup {
    let body = html! {
        h1 class="page-title" { "Hacker News" }
        (category_nav(props.category))
        div class="divider" {}
        ol class="list" {
            @for post in &props.posts {
                (story(post))
            }
        }
    };
    page_shell("Hacker News", Some("A better Hacker News."), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u64, comments: Vec<HnComment>) -> HnComment {
        HnComment {
            id,
            level: 0,
            user: Some(format!("user{}", id)),
            time: 0,
            time_ago: "1 hour ago".to_string(),
            content: format!("<p>comment {}</p>", id),
            deleted: false,
            comments,
        }
    }

    #[test]
    fn renders_nested_comments() {
        let html = comment_tree(&[comment(1, vec![comment(2, vec![])])], 0).into_string();
        let first = html.find("comment 1").unwrap();
        let second = html.find("comment 2").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<ul class=\"comments\">").count(), 2);
    }

    #[test]
    fn deep_threads_link_out() {
        let mut node = comment(100, vec![]);
        for id in (1..=10).rev() {
            node = comment(id, vec![node]);
        }
        let html = comment_tree(&[node], 0).into_string();
        assert!(html.contains("Continue thread"));
        assert!(!html.contains("comment 100"));
    }

    #[test]
    fn active_category_is_not_a_link() {
        let html = category_nav(HnCategory::Ask).into_string();
        assert!(html.contains("<strong>ask</strong>"));
        assert!(html.contains(r#"href="/hn/top""#));
    }
}
