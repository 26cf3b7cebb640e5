use serde::{Deserialize, Serialize};

use super::{Page, POST_REVALIDATE_SECS, WRITING_REVALIDATE_SECS};
use crate::content::ContentSource;
use crate::error::PageError;
use crate::models::Post;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingProps {
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostProps {
    pub post: Post,
}

pub async fn writing(content: &dyn ContentSource) -> Result<Page<WritingProps>, PageError> {
    let posts = content.posts().await?;
    Ok(Page::revalidating(
        WritingProps { posts },
        WRITING_REVALIDATE_SECS,
    ))
}

/// A single post. An unknown slug is reported as [`PageError::NotFound`].
pub async fn post(content: &dyn ContentSource, slug: &str) -> Result<Page<PostProps>, PageError> {
    let post = content
        .post(slug)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("post {}", slug)))?;
    Ok(Page::revalidating(PostProps { post }, POST_REVALIDATE_SECS))
}
