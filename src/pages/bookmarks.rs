use serde::{Deserialize, Serialize};

use super::{Page, BOOKMARKS_REVALIDATE_SECS};
use crate::content::ContentSource;
use crate::error::PageError;
use crate::models::Bookmark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarksProps {
    pub bookmarks: Vec<Bookmark>,
}

pub async fn bookmarks(content: &dyn ContentSource) -> Result<Page<BookmarksProps>, PageError> {
    let bookmarks = content.bookmarks().await?;
    Ok(Page::revalidating(
        BookmarksProps { bookmarks },
        BOOKMARKS_REVALIDATE_SECS,
    ))
}
