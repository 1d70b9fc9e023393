//! ReportVoteStatisticsHandler - Query handler for per-value vote statistics.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::{ReportingError, ScopeResolver};
use crate::domain::foundation::{CaseId, RunId};
use crate::domain::scope::VoteScope;
use crate::domain::votes::{VoteStatistics, VoteStatisticsReporter};
use crate::ports::{DemographicReader, VoteReader};

/// Query for vote statistics.
#[derive(Debug, Clone, Default)]
pub struct ReportVoteStatisticsQuery {
    /// Restrict to participants of this recruitment run.
    pub run_id: Option<RunId>,
    /// Restrict votes and impressions to this case.
    pub case_id: Option<CaseId>,
}

pub type ReportVoteStatisticsResult = Vec<VoteStatistics>;

/// Handler for vote statistics.
pub struct ReportVoteStatisticsHandler {
    votes: Arc<dyn VoteReader>,
    demographics: Arc<dyn DemographicReader>,
    scopes: ScopeResolver,
    min_political_samples: usize,
}

impl ReportVoteStatisticsHandler {
    pub fn new(
        votes: Arc<dyn VoteReader>,
        demographics: Arc<dyn DemographicReader>,
        scopes: ScopeResolver,
        min_political_samples: usize,
    ) -> Self {
        Self {
            votes,
            demographics,
            scopes,
            min_political_samples,
        }
    }

    pub async fn handle(
        &self,
        query: ReportVoteStatisticsQuery,
    ) -> Result<ReportVoteStatisticsResult, ReportingError> {
        let scope = VoteScope {
            participants: self.scopes.participants(query.run_id.as_ref())?,
            case_id: query.case_id,
        };

        let (demographics, votes, impressions) = futures::try_join!(
            self.demographics.list_demographics(&scope.participants),
            self.votes.list_votes(&scope),
            self.votes.list_impressions(&scope),
        )?;

        let statistics = VoteStatisticsReporter::new(self.min_political_samples).report(
            &votes,
            &impressions,
            &demographics,
        );

        info!(
            votes = votes.len(),
            impressions = impressions.len(),
            values = statistics.len(),
            "Reported vote statistics"
        );

        Ok(statistics)
    }
}
