//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::domain::SearchQuery;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/routes", get(search_routes))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The single-page shell: search form, route list and detail views.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Validate a search request into a query the contract will accept.
///
/// The contract itself does no input validation; blank endpoints stop here.
fn parse_query(req: RouteSearchRequest) -> Result<SearchQuery, AppError> {
    let query = SearchQuery {
        origin: req.origin,
        destination: req.destination,
    };

    if !query.is_complete() {
        return Err(AppError::BadRequest {
            message: "請輸入起點同終點。".to_string(),
        });
    }

    Ok(query)
}

/// Ask the model for candidate routes.
///
/// One upstream call per request, no server-side retry or caching: the
/// user's re-submit is the retry.
async fn search_routes(
    State(state): State<AppState>,
    Query(req): Query<RouteSearchRequest>,
) -> Result<Json<RouteSearchResponse>, AppError> {
    let query = parse_query(req)?;

    let routes = state
        .routes
        .fetch_routes(&query.origin, &query.destination)
        .await?;

    Ok(Json(RouteSearchResponse { routes }))
}
