mod handlers;
mod middleware;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub use middleware::require_revalidate_token;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Page props as JSON
        .route("/pages/about", get(handlers::about_props))
        .route("/pages/writing", get(handlers::writing_props))
        .route("/pages/writing/{slug}", get(handlers::post_props))
        .route("/pages/podcast", get(handlers::podcast_props))
        .route("/pages/bookmarks", get(handlers::bookmarks_props))
        .route("/pages/hn", get(handlers::hn_top_props))
        .route("/pages/hn/{category}", get(handlers::hn_props))
        .route("/pages/security", get(handlers::security_props))
        // On-demand regeneration
        .route(
            "/revalidate",
            post(handlers::revalidate).route_layer(from_fn_with_state(
                state.clone(),
                middleware::require_revalidate_token,
            )),
        );

    Router::new()
        // HTML pages
        .route("/", get(handlers::about_page))
        .route("/writing", get(handlers::writing_page))
        .route("/writing/{slug}", get(handlers::post_page))
        .route("/podcast", get(handlers::podcast_page))
        .route("/bookmarks", get(handlers::bookmarks_page))
        .route("/hn", get(handlers::hn_top_page))
        .route("/hn/{category}", get(handlers::hn_page))
        .route("/security", get(handlers::security_page))
        // Health
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
