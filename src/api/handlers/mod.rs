use std::future::Future;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use maud::Markup;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::PageError;
use crate::hn::HnCategory;
use crate::pages::{self, Page, Route};
use crate::render;
use crate::state::AppState;

// ============================================================
// Shared helpers
// ============================================================

/// Serve a route through the regeneration cache.
async fn load<P, F, Fut>(state: &AppState, route: &Route, assemble: F) -> Result<Page<P>, PageError>
where
    P: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Page<P>, PageError>>,
{
    state.cache.get_or_regenerate(&route.path(), assemble).await
}

/// `Cache-Control` value for a page's regeneration directive.
pub fn cache_control<P>(page: &Page<P>) -> String {
    match page.revalidate {
        Some(secs) => format!("public, s-maxage={}, stale-while-revalidate", secs),
        None => "public, s-maxage=31536000, stale-while-revalidate".to_string(),
    }
}

fn html<P>(page: &Page<P>, markup: Markup) -> Response {
    ([(header::CACHE_CONTROL, cache_control(page))], markup).into_response()
}

fn json<P: Serialize>(page: Page<P>) -> Response {
    ([(header::CACHE_CONTROL, cache_control(&page))], Json(page)).into_response()
}

fn hn_category(raw: &str) -> Result<HnCategory, PageError> {
    Ok(raw.parse::<HnCategory>()?)
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn not_found() -> PageError {
    PageError::NotFound("no such route".to_string())
}

// ============================================================
// HTML pages
// ============================================================

pub async fn about_page(State(state): State<AppState>) -> Result<Response, PageError> {
    let page = load(&state, &Route::About, || pages::about(state.content.as_ref())).await?;
    Ok(html(&page, render::about_page(&page.props)))
}

pub async fn writing_page(State(state): State<AppState>) -> Result<Response, PageError> {
    let page = load(&state, &Route::Writing, || pages::writing(state.content.as_ref())).await?;
    Ok(html(&page, render::writing_page(&page.props)))
}

pub async fn post_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, PageError> {
    let route = Route::Post(slug.clone());
    let page = load(&state, &route, || pages::post(state.content.as_ref(), &slug)).await?;
    Ok(html(&page, render::post_page(&page.props)))
}

pub async fn podcast_page(State(state): State<AppState>) -> Result<Response, PageError> {
    let page = load(&state, &Route::Podcast, || pages::podcast(state.content.as_ref())).await?;
    Ok(html(&page, render::podcast_page(&page.props)))
}

pub async fn bookmarks_page(State(state): State<AppState>) -> Result<Response, PageError> {
    let page = load(&state, &Route::Bookmarks, || {
        pages::bookmarks(state.content.as_ref())
    })
    .await?;
    Ok(html(&page, render::bookmarks_page(&page.props)))
}

pub async fn hn_top_page(State(state): State<AppState>) -> Result<Response, PageError> {
    render_hn(&state, HnCategory::Top).await
}

pub async fn hn_page(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response, PageError> {
    render_hn(&state, hn_category(&category)?).await
}

async fn render_hn(state: &AppState, category: HnCategory) -> Result<Response, PageError> {
    let page = load(state, &Route::Hn(category), || {
        pages::hn(state.feed.as_ref(), category)
    })
    .await?;
    Ok(html(&page, render::hn_page(&page.props)))
}

pub async fn security_page() -> Response {
    let page = pages::security();
    html(&page, render::security_page(&page.props))
}

// ============================================================
// Page props (JSON)
// ============================================================

type PropsResult = Result<Response, (StatusCode, String)>;

pub async fn about_props(State(state): State<AppState>) -> PropsResult {
    load(&state, &Route::About, || pages::about(state.content.as_ref()))
        .await
        .map(json)
        .map_err(PageError::into_text_response)
}

pub async fn writing_props(State(state): State<AppState>) -> PropsResult {
    load(&state, &Route::Writing, || pages::writing(state.content.as_ref()))
        .await
        .map(json)
        .map_err(PageError::into_text_response)
}

pub async fn post_props(State(state): State<AppState>, Path(slug): Path<String>) -> PropsResult {
    let route = Route::Post(slug.clone());
    load(&state, &route, || pages::post(state.content.as_ref(), &slug))
        .await
        .map(json)
        .map_err(PageError::into_text_response)
}

pub async fn podcast_props(State(state): State<AppState>) -> PropsResult {
    load(&state, &Route::Podcast, || pages::podcast(state.content.as_ref()))
        .await
        .map(json)
        .map_err(PageError::into_text_response)
}

pub async fn bookmarks_props(State(state): State<AppState>) -> PropsResult {
    load(&state, &Route::Bookmarks, || {
        pages::bookmarks(state.content.as_ref())
    })
    .await
    .map(json)
    .map_err(PageError::into_text_response)
}

pub async fn hn_top_props(State(state): State<AppState>) -> PropsResult {
    hn_json(&state, HnCategory::Top).await
}

pub async fn hn_props(State(state): State<AppState>, Path(category): Path<String>) -> PropsResult {
    let category = hn_category(&category).map_err(PageError::into_text_response)?;
    hn_json(&state, category).await
}

async fn hn_json(state: &AppState, category: HnCategory) -> PropsResult {
    load(state, &Route::Hn(category), || {
        pages::hn(state.feed.as_ref(), category)
    })
    .await
    .map(json)
    .map_err(PageError::into_text_response)
}

pub async fn security_props() -> Response {
    json(pages::security())
}

// ============================================================
// On-demand revalidation
// ============================================================

#[derive(Debug, Deserialize)]
pub struct RevalidateInput {
    /// Site path to mark stale, e.g. `/writing/hello`.
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RevalidateResponse {
    pub path: String,
    /// False when the page had not been generated yet.
    pub revalidated: bool,
}

pub async fn revalidate(
    State(state): State<AppState>,
    Json(input): Json<RevalidateInput>,
) -> Result<Json<RevalidateResponse>, (StatusCode, String)> {
    let route = Route::parse(&input.path).map_err(PageError::into_text_response)?;
    let path = route.path();
    let revalidated = state.cache.invalidate(&path).await;
    tracing::info!(path = %path, revalidated, "on-demand revalidation");
    Ok(Json(RevalidateResponse { path, revalidated }))
}
