//! Query scopes: which participants and which cases a report covers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{CaseId, ContextId, RunId, Timestamp, UserId, ValidationError};

/// Inclusive time window in which a recruitment run's participants signed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl CohortWindow {
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, ValidationError> {
        if end.is_before(&start) {
            return Err(ValidationError::inverted_window("cohort"));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, at: &Timestamp) -> bool {
        !at.is_before(&self.start) && !at.is_after(&self.end)
    }
}

/// A user as seen by scope filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub user_id: UserId,
    /// Id assigned by the external recruitment platform, if recruited.
    #[serde(default)]
    pub study_participant_id: Option<String>,
    pub created_at: Timestamp,
}

/// Restricts a query to a subset of users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParticipantScope {
    #[default]
    All,
    /// Recruited users who signed up inside the window.
    Cohort(CohortWindow),
}

impl ParticipantScope {
    pub fn admits(&self, participant: &Participant) -> bool {
        match self {
            ParticipantScope::All => true,
            ParticipantScope::Cohort(window) => {
                participant.study_participant_id.is_some()
                    && window.contains(&participant.created_at)
            }
        }
    }

    pub fn cohort(&self) -> Option<&CohortWindow> {
        match self {
            ParticipantScope::All => None,
            ParticipantScope::Cohort(window) => Some(window),
        }
    }
}

/// Restriction applied to judgements (and the demographics read alongside).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JudgementFilter {
    pub participants: ParticipantScope,
    pub context_id: Option<ContextId>,
}

/// Restriction applied to votes and impressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteScope {
    pub participants: ParticipantScope,
    pub case_id: Option<CaseId>,
}

/// Named recruitment runs and their windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CohortRegistry {
    runs: BTreeMap<RunId, CohortWindow>,
}

impl CohortRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a run.
    pub fn with_run(mut self, run_id: RunId, window: CohortWindow) -> Self {
        self.runs.insert(run_id, window);
        self
    }

    pub fn resolve(&self, run_id: &RunId) -> Option<&CohortWindow> {
        self.runs.get(run_id)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Rejects runs whose window ends before it starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (run_id, window) in &self.runs {
            if window.end.is_before(&window.start) {
                return Err(ValidationError::inverted_window(run_id.as_str()));
            }
        }
        Ok(())
    }
}
