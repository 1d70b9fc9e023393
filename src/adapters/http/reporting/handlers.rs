//! HTTP handlers for reporting endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::error;

use crate::application::handlers::{
    ReportVoteStatisticsHandler, ReportVoteStatisticsQuery, ReportingError, ScopeResolver,
    SummarizeGraphHandler, SummarizeGraphQuery,
};
use crate::domain::foundation::{CaseId, ContextId, RunId, ValidationError};
use crate::domain::graph::{EdgePolicy, MoralGraphSummary};
use crate::ports::{DemographicReader, JudgementReader, ReaderError, VoteReader};

use super::dto::{ErrorResponse, VoteStatisticsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Reporting API error that implements IntoResponse.
#[derive(Debug)]
pub enum ReportingApiError {
    BadRequest(String),
    UnknownRun(String),
    Internal(String),
}

impl IntoResponse for ReportingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ReportingApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ReportingApiError::UnknownRun(run_id) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::unknown_run(&run_id))
            }
            ReportingApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ReportingError> for ReportingApiError {
    fn from(err: ReportingError) -> Self {
        match err {
            ReportingError::UnknownRun(run_id) => {
                ReportingApiError::UnknownRun(run_id.as_str().to_string())
            }
            ReportingError::InvalidScope(e) => ReportingApiError::BadRequest(e.to_string()),
            ReportingError::Store(ReaderError::InvalidInput(msg)) => {
                ReportingApiError::BadRequest(msg)
            }
            ReportingError::Store(e) => {
                error!(error = %e, "Reporting store read failed");
                ReportingApiError::Internal("Failed to read judgement store".to_string())
            }
        }
    }
}

impl From<ValidationError> for ReportingApiError {
    fn from(err: ValidationError) -> Self {
        ReportingApiError::BadRequest(err.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing reporting dependencies.
#[derive(Clone)]
pub struct ReportingAppState {
    pub judgement_reader: Arc<dyn JudgementReader>,
    pub demographic_reader: Arc<dyn DemographicReader>,
    pub vote_reader: Arc<dyn VoteReader>,
    pub scopes: ScopeResolver,
    pub edge_policy: EdgePolicy,
    pub min_political_samples: usize,
}

impl ReportingAppState {
    pub fn summarize_graph_handler(&self) -> SummarizeGraphHandler {
        SummarizeGraphHandler::new(
            self.judgement_reader.clone(),
            self.demographic_reader.clone(),
            self.scopes.clone(),
            self.edge_policy,
        )
    }

    pub fn vote_statistics_handler(&self) -> ReportVoteStatisticsHandler {
        ReportVoteStatisticsHandler::new(
            self.vote_reader.clone(),
            self.demographic_reader.clone(),
            self.scopes.clone(),
            self.min_political_samples,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the graph endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphParams {
    #[serde(default)]
    pub include_all_edges: bool,
    pub run_id: Option<String>,
    pub context_id: Option<String>,
}

/// Query parameters for the vote statistics endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteParams {
    pub run_id: Option<String>,
    pub case_id: Option<String>,
}

fn parse_optional<T>(
    raw: Option<String>,
    parse: impl FnOnce(String) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    raw.map(parse).transpose()
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/data/graph?includeAllEdges=&runId=&contextId=
///
/// Returns the moral graph summary.
pub async fn get_graph(
    State(state): State<ReportingAppState>,
    Query(params): Query<GraphParams>,
) -> Result<Json<MoralGraphSummary>, ReportingApiError> {
    let query = SummarizeGraphQuery {
        include_all_edges: params.include_all_edges,
        run_id: parse_optional(params.run_id, RunId::new)?,
        context_id: parse_optional(params.context_id, ContextId::new)?,
    };

    let handler = state.summarize_graph_handler();
    let summary = handler.handle(query).await?;

    Ok(Json(summary))
}

/// GET /api/data/votes?runId=&caseId=
///
/// Returns per-value vote statistics.
pub async fn get_vote_statistics(
    State(state): State<ReportingAppState>,
    Query(params): Query<VoteParams>,
) -> Result<Json<VoteStatisticsResponse>, ReportingApiError> {
    let query = ReportVoteStatisticsQuery {
        run_id: parse_optional(params.run_id, RunId::new)?,
        case_id: parse_optional(params.case_id, CaseId::new)?,
    };

    let handler = state.vote_statistics_handler();
    let statistics = handler.handle(query).await?;

    Ok(Json(VoteStatisticsResponse { statistics }))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
