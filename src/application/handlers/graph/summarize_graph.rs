//! SummarizeGraphHandler - Query handler producing the moral graph.
//!
//! Resolves the requested scope, reads values, judgements, and
//! demographics concurrently, then runs the pure graph pipeline.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::{ReportingError, ScopeResolver};
use crate::domain::foundation::{ContextId, RunId};
use crate::domain::graph::{summarize, EdgePolicy, MoralGraphSummary};
use crate::domain::scope::JudgementFilter;
use crate::ports::{DemographicReader, JudgementReader};

/// Query for a graph summary.
#[derive(Debug, Clone, Default)]
pub struct SummarizeGraphQuery {
    /// Also return every cooked edge, filtered or not.
    pub include_all_edges: bool,
    /// Restrict to participants of this recruitment run.
    pub run_id: Option<RunId>,
    /// Restrict to judgements made in this context.
    pub context_id: Option<ContextId>,
}

pub type SummarizeGraphResult = MoralGraphSummary;

/// Handler for building the moral graph summary.
pub struct SummarizeGraphHandler {
    judgements: Arc<dyn JudgementReader>,
    demographics: Arc<dyn DemographicReader>,
    scopes: ScopeResolver,
    policy: EdgePolicy,
}

impl SummarizeGraphHandler {
    pub fn new(
        judgements: Arc<dyn JudgementReader>,
        demographics: Arc<dyn DemographicReader>,
        scopes: ScopeResolver,
        policy: EdgePolicy,
    ) -> Self {
        Self {
            judgements,
            demographics,
            scopes,
            policy,
        }
    }

    pub async fn handle(
        &self,
        query: SummarizeGraphQuery,
    ) -> Result<SummarizeGraphResult, ReportingError> {
        let filter = JudgementFilter {
            participants: self.scopes.participants(query.run_id.as_ref())?,
            context_id: query.context_id,
        };

        let (values, judgements, demographics) = futures::try_join!(
            self.judgements.list_values(),
            self.judgements.list_judgements(&filter),
            self.demographics.list_demographics(&filter.participants),
        )?;

        let summary = summarize(
            values,
            &judgements,
            &demographics,
            &self.policy,
            query.include_all_edges,
        );

        info!(
            judgements = judgements.len(),
            values = summary.values.len(),
            edges = summary.edges.len(),
            "Summarized moral graph"
        );

        Ok(summary)
    }
}
