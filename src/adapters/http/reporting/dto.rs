//! Response DTOs for reporting endpoints.

use serde::Serialize;

use crate::domain::votes::VoteStatistics;

/// Envelope for the vote statistics endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct VoteStatisticsResponse {
    pub statistics: Vec<VoteStatistics>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unknown_run(run_id: &str) -> Self {
        Self {
            code: "UNKNOWN_RUN".to_string(),
            message: format!("Unknown run: {}", run_id),
            details: Some(serde_json::json!({ "runId": run_id })),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
