//! Resolves a requested run into a participant scope.

use std::sync::Arc;

use crate::domain::foundation::RunId;
use crate::domain::scope::{CohortRegistry, ParticipantScope};

use super::ReportingError;

/// Maps optional run ids onto cohort windows.
#[derive(Clone, Default)]
pub struct ScopeResolver {
    cohorts: Arc<CohortRegistry>,
}

impl ScopeResolver {
    pub fn new(cohorts: Arc<CohortRegistry>) -> Self {
        Self { cohorts }
    }

    /// No run means every participant. An unknown run is an error.
    pub fn participants(&self, run_id: Option<&RunId>) -> Result<ParticipantScope, ReportingError> {
        match run_id {
            None => Ok(ParticipantScope::All),
            Some(run_id) => self
                .cohorts
                .resolve(run_id)
                .map(|window| ParticipantScope::Cohort(*window))
                .ok_or_else(|| ReportingError::UnknownRun(run_id.clone())),
        }
    }
}
