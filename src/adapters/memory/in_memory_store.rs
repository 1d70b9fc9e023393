//! In-memory judgement store.
//!
//! Implements every reader port over plain vectors. Used by tests and by
//! local demos that load a JSON snapshot instead of a database.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use crate::domain::foundation::UserId;
use crate::domain::graph::{Demographic, Judgement, Value};
use crate::domain::scope::{JudgementFilter, Participant, ParticipantScope, VoteScope};
use crate::domain::votes::{Impression, Vote};
use crate::ports::{DemographicReader, JudgementReader, ReaderError, VoteReader};

/// Everything the store holds, in the shape of a JSON snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSnapshot {
    pub values: Vec<Value>,
    pub judgements: Vec<Judgement>,
    pub demographics: Vec<Demographic>,
    pub votes: Vec<Vote>,
    pub impressions: Vec<Impression>,
    pub participants: Vec<Participant>,
}

/// In-memory implementation of the reader ports.
#[derive(Default)]
pub struct InMemoryMoralGraphStore {
    data: RwLock<StoreSnapshot>,
}

impl InMemoryMoralGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            data: RwLock::new(snapshot),
        }
    }

    /// Parses a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, ReaderError> {
        let snapshot: StoreSnapshot = serde_json::from_str(json)
            .map_err(|e| ReaderError::CorruptRecord(e.to_string()))?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn record_value(&self, value: Value) {
        self.write(|data| data.values.push(value));
    }

    pub fn record_judgement(&self, judgement: Judgement) {
        self.write(|data| data.judgements.push(judgement));
    }

    pub fn record_demographic(&self, demographic: Demographic) {
        self.write(|data| data.demographics.push(demographic));
    }

    pub fn record_vote(&self, vote: Vote) {
        self.write(|data| data.votes.push(vote));
    }

    pub fn record_impression(&self, impression: Impression) {
        self.write(|data| data.impressions.push(impression));
    }

    pub fn record_participant(&self, participant: Participant) {
        self.write(|data| data.participants.push(participant));
    }

    fn write(&self, f: impl FnOnce(&mut StoreSnapshot)) {
        let mut data = self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut data);
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreSnapshot>, ReaderError> {
        self.data
            .read()
            .map_err(|_| ReaderError::Database("in-memory store lock poisoned".to_string()))
    }
}

/// Decides scope membership by user id.
struct Admission<'a> {
    scope: &'a ParticipantScope,
    participants: HashMap<UserId, &'a Participant>,
}

impl<'a> Admission<'a> {
    fn new(scope: &'a ParticipantScope, participants: &'a [Participant]) -> Self {
        Self {
            scope,
            participants: participants.iter().map(|p| (p.user_id, p)).collect(),
        }
    }

    fn admits(&self, user_id: UserId) -> bool {
        match self.scope {
            ParticipantScope::All => true,
            ParticipantScope::Cohort(_) => self
                .participants
                .get(&user_id)
                .is_some_and(|p| self.scope.admits(p)),
        }
    }
}

#[async_trait]
impl JudgementReader for InMemoryMoralGraphStore {
    async fn list_values(&self) -> Result<Vec<Value>, ReaderError> {
        Ok(self.read()?.values.clone())
    }

    async fn list_judgements(&self, filter: &JudgementFilter) -> Result<Vec<Judgement>, ReaderError> {
        let data = self.read()?;
        let admission = Admission::new(&filter.participants, &data.participants);
        Ok(data
            .judgements
            .iter()
            .filter(|j| admission.admits(j.user_id))
            .filter(|j| filter.context_id.as_ref().map_or(true, |c| &j.context_id == c))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DemographicReader for InMemoryMoralGraphStore {
    async fn list_demographics(
        &self,
        participants: &ParticipantScope,
    ) -> Result<Vec<Demographic>, ReaderError> {
        let data = self.read()?;
        let admission = Admission::new(participants, &data.participants);
        Ok(data
            .demographics
            .iter()
            .filter(|d| admission.admits(d.user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl VoteReader for InMemoryMoralGraphStore {
    async fn list_votes(&self, scope: &VoteScope) -> Result<Vec<Vote>, ReaderError> {
        let data = self.read()?;
        let admission = Admission::new(&scope.participants, &data.participants);
        Ok(data
            .votes
            .iter()
            .filter(|v| admission.admits(v.user_id))
            .filter(|v| scope.case_id.is_none() || v.case_id == scope.case_id)
            .cloned()
            .collect())
    }

    async fn list_impressions(&self, scope: &VoteScope) -> Result<Vec<Impression>, ReaderError> {
        let data = self.read()?;
        let admission = Admission::new(&scope.participants, &data.participants);
        Ok(data
            .impressions
            .iter()
            .filter(|i| admission.admits(i.user_id))
            .filter(|i| scope.case_id.is_none() || i.case_id == scope.case_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CaseId, ContextId, Timestamp, ValueId};
    use crate::domain::graph::Relationship;
    use crate::domain::scope::CohortWindow;
    use chrono::{TimeZone, Utc};

    fn ts(day: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2023, 10, day, 0, 0, 0).unwrap())
    }

    fn judgement(user: i64, context: &str) -> Judgement {
        Judgement::new(
            UserId::new(user),
            ValueId::new(1),
            ValueId::new(2),
            ContextId::new(context).unwrap(),
            Relationship::Upgrade,
        )
    }

    fn store_with_cohort() -> InMemoryMoralGraphStore {
        let store = InMemoryMoralGraphStore::new();
        store.record_participant(Participant {
            user_id: UserId::new(1),
            study_participant_id: Some("p1".to_string()),
            created_at: ts(3),
        });
        store.record_participant(Participant {
            user_id: UserId::new(2),
            study_participant_id: None,
            created_at: ts(3),
        });
        store.record_participant(Participant {
            user_id: UserId::new(3),
            study_participant_id: Some("p3".to_string()),
            created_at: ts(9),
        });
        store
    }

    #[tokio::test]
    async fn judgements_filter_by_context() {
        let store = InMemoryMoralGraphStore::new();
        store.record_judgement(judgement(1, "a"));
        store.record_judgement(judgement(2, "b"));

        let filter = JudgementFilter {
            context_id: Some(ContextId::new("b").unwrap()),
            ..Default::default()
        };
        let found = store.list_judgements(&filter).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user_id, UserId::new(2));
    }

    #[tokio::test]
    async fn cohort_scope_filters_judgements_and_demographics() {
        let store = store_with_cohort();
        for user in 1..=4 {
            store.record_judgement(judgement(user, "a"));
            store.record_demographic(Demographic::new(UserId::new(user), Some("democrat")));
        }

        let scope = ParticipantScope::Cohort(CohortWindow::new(ts(2), ts(4)).unwrap());
        let filter = JudgementFilter {
            participants: scope,
            context_id: None,
        };

        let judgements = store.list_judgements(&filter).await.unwrap();
        let demographics = store.list_demographics(&scope).await.unwrap();

        assert_eq!(judgements.len(), 1);
        assert_eq!(judgements[0].user_id, UserId::new(1));
        assert_eq!(demographics.len(), 1);
    }

    #[tokio::test]
    async fn votes_filter_by_case() {
        let store = InMemoryMoralGraphStore::new();
        let case = CaseId::new("grief").unwrap();
        store.record_vote(Vote {
            user_id: UserId::new(1),
            value_id: ValueId::new(5),
            case_id: Some(case.clone()),
        });
        store.record_vote(Vote {
            user_id: UserId::new(1),
            value_id: ValueId::new(6),
            case_id: None,
        });

        let all = store.list_votes(&VoteScope::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let scoped = VoteScope {
            case_id: Some(case),
            ..Default::default()
        };
        let filtered = store.list_votes(&scoped).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value_id, ValueId::new(5));
    }

    #[tokio::test]
    async fn snapshot_parses_from_json() {
        let json = r#"{
            "values": [{"id": 1, "title": "Honesty", "instructionsShort": "", "instructionsDetailed": ""}],
            "impressions": [{"userId": 1, "valueId": 1}]
        }"#;
        let store = InMemoryMoralGraphStore::from_json(json).unwrap();

        assert_eq!(store.list_values().await.unwrap().len(), 1);
        assert_eq!(store.list_impressions(&VoteScope::default()).await.unwrap().len(), 1);
        assert!(store.list_judgements(&JudgementFilter::default()).await.unwrap().is_empty());
    }

    #[test]
    fn malformed_snapshot_is_rejected() {
        let result = InMemoryMoralGraphStore::from_json("{\"values\": 3}");
        assert!(matches!(result, Err(ReaderError::CorruptRecord(_))));
    }
}
