//! Authentication for the on-demand revalidation endpoint.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Require `Authorization: Bearer <REVALIDATE_TOKEN>`.
///
/// With no token configured the endpoint is switched off and answers 403.
pub async fn require_revalidate_token(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = state.config.revalidate_token.as_deref() else {
        tracing::warn!("revalidation endpoint called while REVALIDATE_TOKEN is unset");
        return Err(StatusCode::FORBIDDEN);
    };

    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match presented {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("revalidation refused: token mismatch");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("revalidation refused: no bearer token");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
