//! HTTP routes for reporting endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_graph, get_vote_statistics, health, ReportingAppState};

/// Creates the reporting router with all routes.
pub fn reporting_routes(state: ReportingAppState) -> Router {
    Router::new()
        // GET /api/data/graph
        .route("/api/data/graph", get(get_graph))
        // GET /api/data/votes
        .route("/api/data/votes", get(get_vote_statistics))
        .route("/health", get(health))
        .with_state(state)
}
