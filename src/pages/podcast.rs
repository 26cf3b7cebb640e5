use serde::{Deserialize, Serialize};

use super::{Page, PODCAST_REVALIDATE_SECS};
use crate::content::ContentSource;
use crate::error::PageError;
use crate::models::Episode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastProps {
    pub episodes: Vec<Episode>,
}

pub async fn podcast(content: &dyn ContentSource) -> Result<Page<PodcastProps>, PageError> {
    let episodes = content.episodes().await?;
    Ok(Page::revalidating(
        PodcastProps { episodes },
        PODCAST_REVALIDATE_SECS,
    ))
}
