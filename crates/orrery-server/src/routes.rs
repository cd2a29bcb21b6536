//! HTTP routes: catalog search and liveness.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use orrery_core::{search, MatchOutcome, PlanetSummary, PlanetTable, SearchCriteria};

/// Application state shared across handlers. The table is an immutable
/// snapshot, so concurrent requests read it without locking.
pub struct AppState {
    pub table: PlanetTable,
}

/// Wire shape of a search response: either the matching rows or a
/// human-readable no-match message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Planets(Vec<PlanetSummary>),
    Message { message: String },
}

/// GET /search — filter the catalog by the query-string criteria.
///
/// Type coercion happens in the `Query` extractor: a non-numeric value for
/// a numeric parameter is rejected with a 4xx here and never reaches the
/// matcher. Out-of-range values pass through and are ignored by the
/// matcher's validity guards.
async fn search_planets(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<SearchCriteria>,
) -> Json<SearchResponse> {
    match search(&criteria, &state.table) {
        MatchOutcome::Planets(rows) => Json(SearchResponse::Planets(rows)),
        MatchOutcome::NoMatch => Json(SearchResponse::Message {
            message: "No matching planets found".to_string(),
        }),
    }
}

async fn health() -> &'static str {
    "OK"
}

/// Build the API router.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", get(search_planets))
        .route("/health", get(health))
        .with_state(state)
}
