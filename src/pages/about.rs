use serde::{Deserialize, Serialize};

use super::{Page, ABOUT_REVALIDATE_SECS};
use crate::content::{ContentSource, HomeData};
use crate::error::PageError;

/// Card for one App Dissection write-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DissectionSummary {
    pub title: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutProps {
    pub data: HomeData,
    pub summaries: Vec<DissectionSummary>,
}

/// App Dissections ship with the site rather than the content API.
///
/// Sample entries standing in for the site's dissection data files.
pub fn dissection_summaries() -> Vec<DissectionSummary> {
    [
        (
            "Things",
            "things",
            "Task management with a focus on calm, deliberate interactions.",
        ),
        (
            "Overcast",
            "overcast",
            "A podcast player with thoughtful playback controls.",
        ),
        (
            "Slack",
            "slack",
            "Team messaging and the details that keep conversations moving.",
        ),
        (
            "Airbnb",
            "airbnb",
            "Search, booking and trip planning across a large product surface.",
        ),
    ]
    .into_iter()
    .map(|(title, slug, description)| DissectionSummary {
        title: title.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Home/about page: recent writing and podcast episodes in one query.
pub async fn about(content: &dyn ContentSource) -> Result<Page<AboutProps>, PageError> {
    let data = content.home().await?;
    tracing::debug!(
        posts = data.posts.len(),
        episodes = data.episodes.len(),
        "assembled about page"
    );

    Ok(Page::revalidating(
        AboutProps {
            data,
            summaries: dissection_summaries(),
        },
        ABOUT_REVALIDATE_SECS,
    ))
}
