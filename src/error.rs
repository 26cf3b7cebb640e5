//! Page errors and their HTTP rendering.
//!
//! Errors are rendered as small HTML pages, since visitors are people with
//! browsers. The JSON props routes map the same errors to plain-text bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::content::ClientError;
use crate::hn::FeedError;

/// Anything that stops a page from being assembled.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The content API failed, returned errors, or sent an unreadable body.
    #[error("content API: {0}")]
    Content(#[from] ClientError),

    /// The Hacker News feed failed.
    #[error("hacker news: {0}")]
    Feed(#[from] FeedError),

    /// The route or the entity it names does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::Feed(FeedError::UnknownCategory(_)) => StatusCode::NOT_FOUND,
            Self::Content(_) | Self::Feed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a visitor. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self.status() {
            StatusCode::NOT_FOUND => "This page does not exist.".to_string(),
            StatusCode::BAD_GATEWAY => {
                "Content is temporarily unavailable. Please try again later.".to_string()
            }
            _ => "Something went wrong. Please try again later.".to_string(),
        }
    }

    fn log(&self) {
        match self.status() {
            StatusCode::NOT_FOUND => tracing::debug!(error = %self, "page not found"),
            _ => tracing::error!(error = %self, "page generation failed"),
        }
    }

    /// Plain-text response for the JSON props routes.
    pub fn into_text_response(self) -> (StatusCode, String) {
        self.log();
        (self.status(), self.public_message())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let title = status.canonical_reason().unwrap_or("Error");
        let markup = crate::render::error_page(title, &self.public_message());
        (status, markup).into_response()
    }
}
