use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A podcast episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    /// Player token used to build the embed URL.
    pub token: Option<String>,
    pub legacy_id: Option<String>,
}
