//! The fixed set of queries the site issues.

use super::{Document, Field, BOOKMARK_FRAGMENT, EPISODE_FRAGMENT, POST_FRAGMENT};

/// Names accepted by [`by_name`].
pub const QUERY_NAMES: &[&str] = &["post", "posts", "episodes", "bookmarks", "home"];

pub fn posts_field() -> Field {
    Field::new("posts", POST_FRAGMENT)
}

pub fn episodes_field() -> Field {
    Field::new("episodes", EPISODE_FRAGMENT)
}

pub fn bookmarks_field() -> Field {
    Field::new("bookmarks", BOOKMARK_FRAGMENT)
}

/// A single post by slug. The slug is not validated; unknown slugs come back null.
pub fn post(slug: &str) -> Document {
    Document::single(Field::new("post", POST_FRAGMENT).arg("slug", slug))
}

pub fn posts() -> Document {
    Document::single(posts_field())
}

pub fn episodes() -> Document {
    Document::single(episodes_field())
}

pub fn bookmarks() -> Document {
    Document::single(bookmarks_field())
}

/// Posts and episodes in one round trip.
pub fn home() -> Document {
    Document::new(vec![posts_field(), episodes_field()])
}

/// Look up a query by name. `post` requires a slug.
pub fn by_name(name: &str, slug: Option<&str>) -> Option<Document> {
    match name {
        "post" => slug.map(post),
        "posts" => Some(posts()),
        "episodes" => Some(episodes()),
        "bookmarks" => Some(bookmarks()),
        "home" => Some(home()),
        _ => None,
    }
}
