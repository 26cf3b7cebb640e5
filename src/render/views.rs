//! Views for the content pages.

use maud::{html, Markup, PreEscaped};

use super::{is_safe_url, page_shell, SITE_NAME};
use crate::models::{Bookmark, Episode, Post};
use crate::pages::{AboutProps, BookmarksProps, PodcastProps, PostProps, SecurityProps, WritingProps};

fn post_list(posts: &[Post]) -> Markup {
    html! {
        ul class="list" {
            @for post in posts {
                li {
                    a href={ "/writing/" (post.slug) } { (post.title) }
                    @if let Some(date) = post.published_label() {
                        div class="meta" { (date) }
                    }
                }
            }
        }
    }
}

fn episode_list(episodes: &[Episode]) -> Markup {
    html! {
        ul class="list" {
            @for episode in episodes {
                li {
                    span { (episode.title) }
                    @if let Some(ref description) = episode.description {
                        div class="meta" { (description) }
                    }
                }
            }
        }
    }
}

fn bookmark_item(bookmark: &Bookmark) -> Markup {
    html! {
        li {
            @if is_safe_url(&bookmark.url) {
                a href=(bookmark.url) rel="noopener noreferrer" target="_blank" {
                    (bookmark.display_title())
                }
            } @else {
                span { (bookmark.display_title()) }
            }
            @if let Some(ref host) = bookmark.host {
                div class="meta" { (host) }
            }
            @if let Some(ref description) = bookmark.description {
                p class="subtitle" { (description) }
            }
        }
    }
}

pub fn about_page(props: &AboutProps) -> Markup {
    let body = html! {
        div class="prose" {
            p { "I’m a product designer, podcaster, and writer, currently living in San Francisco." }
            p {
                "I co-host the "
                a href="https://designdetails.fm" { "Design Details Podcast" }
                ", a weekly conversation about design process and culture."
            }
        }
        div class="divider" {}
        h2 class="section-title" { "Writing" }
        (post_list(&props.data.posts))
        a href="/writing" { "See all posts →" }
        div class="divider" {}
        h2 class="section-title" { "Design Details Podcast" }
        (episode_list(&props.data.episodes))
        div class="divider" {}
        h2 class="section-title" { "App Dissection" }
        ul class="list" {
            @for summary in &props.summaries {
                li {
                    a href={ "/design-details/" (summary.slug) } { (summary.title) }
                    div class="meta" { (summary.description) }
                }
            }
        }
    };
    page_shell(SITE_NAME, Some("Designer, podcaster, and writer."), body)
}

pub fn writing_page(props: &WritingProps) -> Markup {
    let body = html! {
        h1 class="page-title" { "Writing" }
        (post_list(&props.posts))
    };
    page_shell("Writing", Some("Thinking out loud about design and development."), body)
}

pub fn post_page(props: &PostProps) -> Markup {
    let post = &props.post;
    let body = html! {
        a class="meta" href="/writing" { "⬖ Writing" }
        h1 class="page-title" { (post.title) }
        @if let Some(date) = post.published_label() {
            span class="meta" { (date) }
        }
        div class="prose" {
            (PreEscaped(post.html.as_deref().unwrap_or_default()))
        }
    };
    page_shell(&post.title, post.excerpt.as_deref(), body)
}

pub fn podcast_page(props: &PodcastProps) -> Markup {
    let body = html! {
        h1 class="page-title" { "Design Details" }
        p class="subtitle" { "A weekly conversation about design process and culture." }
        (episode_list(&props.episodes))
    };
    page_shell("Podcast", Some("Design Details podcast episodes."), body)
}

pub fn bookmarks_page(props: &BookmarksProps) -> Markup {
    let body = html! {
        h1 class="page-title" { "Bookmarks" }
        p class="subtitle" { "Internet things, saved for later." }
        ul class="list" {
            @for bookmark in &props.bookmarks {
                (bookmark_item(bookmark))
            }
        }
    };
    page_shell("Bookmarks", Some("Internet things, saved for later."), body)
}

pub fn security_page(props: &SecurityProps) -> Markup {
    let body = html! {
        h1 class="page-title" { "Security Checklist" }
        p class="subtitle" {
            "Tools and resources designed to improve your online privacy, safety, and security."
        }
        ul class="list" {
            @for item in &props.checklist {
                li {
                    h2 class="section-title" { (item.title) }
                    p { (item.description) }
                    @if !item.resources.is_empty() {
                        p class="meta" { "Resources" }
                        ul class="list" {
                            @for resource in &item.resources {
                                li { a href=(resource.url) rel="noopener noreferrer" target="_blank" { (resource.name) } }
                            }
                        }
                    }
                }
            }
        }
    };
    page_shell(
        "Security Checklist",
        Some("Tools and resources for staying safe on the internet."),
        body,
    )
}
