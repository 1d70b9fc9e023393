//! PostgreSQL implementation of the reader ports.
//!
//! Expected tables:
//!
//! - `users (id BIGINT, prolific_id TEXT NULL, created_at TIMESTAMPTZ)`
//! - `canonical_values_cards (id BIGINT, title, instructions_short, instructions_detailed, evaluation_criteria TEXT[])`
//! - `edges (user_id, from_id, to_id BIGINT, context_id TEXT, relationship TEXT, comment TEXT NULL, run_id TEXT NULL)`
//! - `demographics (user_id BIGINT, us_political_affiliation TEXT NULL)`
//! - `votes (user_id, values_card_id BIGINT, case_id TEXT NULL)`
//! - `impressions (user_id, values_card_id BIGINT, case_id TEXT NULL)`
//!
//! Participant scoping joins `users` and is expressed with nullable
//! parameters so every read is a single static query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CaseId, ContextId, RunId, UserId, ValueId};
use crate::domain::graph::{Demographic, Judgement, Relationship, Value};
use crate::domain::scope::{JudgementFilter, ParticipantScope, VoteScope};
use crate::domain::votes::{Impression, Vote};
use crate::ports::{DemographicReader, JudgementReader, ReaderError, VoteReader};

/// PostgreSQL implementation of the judgement, demographic, and vote readers.
#[derive(Clone)]
pub struct PostgresMoralGraphReader {
    pool: PgPool,
}

impl PostgresMoralGraphReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Cohort bounds as nullable query parameters.
fn cohort_bounds(scope: &ParticipantScope) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    match scope.cohort() {
        Some(window) => (
            Some(*window.start.as_datetime()),
            Some(*window.end.as_datetime()),
        ),
        None => (None, None),
    }
}

fn corrupt(field: &str, err: impl std::fmt::Display) -> ReaderError {
    ReaderError::CorruptRecord(format!("{}: {}", field, err))
}

fn row_to_value(row: &PgRow) -> Result<Value, ReaderError> {
    Ok(Value {
        id: ValueId::new(row.try_get("id")?),
        title: row.try_get("title")?,
        instructions_short: row.try_get("instructions_short")?,
        instructions_detailed: row.try_get("instructions_detailed")?,
        evaluation_criteria: row
            .try_get::<Option<Vec<String>>, _>("evaluation_criteria")?
            .unwrap_or_default(),
    })
}

fn row_to_judgement(row: &PgRow) -> Result<Judgement, ReaderError> {
    let relationship: String = row.try_get("relationship")?;
    let relationship: Relationship = relationship
        .parse()
        .map_err(|e| corrupt("relationship", e))?;

    let context_id: String = row.try_get("context_id")?;
    let run_id = row
        .try_get::<Option<String>, _>("run_id")?
        .filter(|r| !r.trim().is_empty())
        .map(RunId::new)
        .transpose()
        .map_err(|e| corrupt("run_id", e))?;

    Ok(Judgement {
        user_id: UserId::new(row.try_get("user_id")?),
        from_id: ValueId::new(row.try_get("from_id")?),
        to_id: ValueId::new(row.try_get("to_id")?),
        context_id: ContextId::new(context_id).map_err(|e| corrupt("context_id", e))?,
        relationship,
        comment: row.try_get("comment")?,
        run_id,
    })
}

fn row_case_id(row: &PgRow) -> Result<Option<CaseId>, ReaderError> {
    row.try_get::<Option<String>, _>("case_id")?
        .filter(|c| !c.trim().is_empty())
        .map(CaseId::new)
        .transpose()
        .map_err(|e| corrupt("case_id", e))
}

#[async_trait]
impl JudgementReader for PostgresMoralGraphReader {
    async fn list_values(&self) -> Result<Vec<Value>, ReaderError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, instructions_short, instructions_detailed, evaluation_criteria
            FROM canonical_values_cards
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_value).collect()
    }

    async fn list_judgements(&self, filter: &JudgementFilter) -> Result<Vec<Judgement>, ReaderError> {
        let (start, end) = cohort_bounds(&filter.participants);

        let rows = sqlx::query(
            r#"
            SELECT e.user_id, e.from_id, e.to_id, e.context_id, e.relationship, e.comment, e.run_id
            FROM edges e
            JOIN users u ON u.id = e.user_id
            WHERE ($1::text IS NULL OR e.context_id = $1)
              AND ($2::timestamptz IS NULL
                   OR (u.prolific_id IS NOT NULL AND u.created_at >= $2 AND u.created_at <= $3))
            ORDER BY e.from_id, e.to_id, e.user_id
            "#,
        )
        .bind(filter.context_id.as_ref().map(|c| c.as_str()))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows = rows.len(), "Loaded judgements");
        rows.iter().map(row_to_judgement).collect()
    }
}

#[async_trait]
impl DemographicReader for PostgresMoralGraphReader {
    async fn list_demographics(
        &self,
        participants: &ParticipantScope,
    ) -> Result<Vec<Demographic>, ReaderError> {
        let (start, end) = cohort_bounds(participants);

        let rows = sqlx::query(
            r#"
            SELECT d.user_id, d.us_political_affiliation
            FROM demographics d
            JOIN users u ON u.id = d.user_id
            WHERE ($1::timestamptz IS NULL
                   OR (u.prolific_id IS NOT NULL AND u.created_at >= $1 AND u.created_at <= $2))
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<Demographic, ReaderError> {
                Ok(Demographic {
                    user_id: UserId::new(row.try_get("user_id")?),
                    us_political_affiliation: row.try_get("us_political_affiliation")?,
                })
            })
            .collect()
    }
}

#[async_trait]
impl VoteReader for PostgresMoralGraphReader {
    async fn list_votes(&self, scope: &VoteScope) -> Result<Vec<Vote>, ReaderError> {
        let (start, end) = cohort_bounds(&scope.participants);

        let rows = sqlx::query(
            r#"
            SELECT v.user_id, v.values_card_id, v.case_id
            FROM votes v
            JOIN users u ON u.id = v.user_id
            WHERE ($1::text IS NULL OR v.case_id = $1)
              AND ($2::timestamptz IS NULL
                   OR (u.prolific_id IS NOT NULL AND u.created_at >= $2 AND u.created_at <= $3))
            "#,
        )
        .bind(scope.case_id.as_ref().map(|c| c.as_str()))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<Vote, ReaderError> {
                Ok(Vote {
                    user_id: UserId::new(row.try_get("user_id")?),
                    value_id: ValueId::new(row.try_get("values_card_id")?),
                    case_id: row_case_id(row)?,
                })
            })
            .collect()
    }

    async fn list_impressions(&self, scope: &VoteScope) -> Result<Vec<Impression>, ReaderError> {
        let (start, end) = cohort_bounds(&scope.participants);

        let rows = sqlx::query(
            r#"
            SELECT i.user_id, i.values_card_id, i.case_id
            FROM impressions i
            JOIN users u ON u.id = i.user_id
            WHERE ($1::text IS NULL OR i.case_id = $1)
              AND ($2::timestamptz IS NULL
                   OR (u.prolific_id IS NOT NULL AND u.created_at >= $2 AND u.created_at <= $3))
            "#,
        )
        .bind(scope.case_id.as_ref().map(|c| c.as_str()))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<Impression, ReaderError> {
                Ok(Impression {
                    user_id: UserId::new(row.try_get("user_id")?),
                    value_id: ValueId::new(row.try_get("values_card_id")?),
                    case_id: row_case_id(row)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::scope::CohortWindow;

    #[test]
    fn all_participants_bind_null_bounds() {
        assert_eq!(cohort_bounds(&ParticipantScope::All), (None, None));
    }

    #[test]
    fn cohort_binds_window_bounds() {
        let start = Timestamp::now();
        let end = Timestamp::now();
        let scope = ParticipantScope::Cohort(CohortWindow::new(start, end).unwrap());

        let (lo, hi) = cohort_bounds(&scope);
        assert_eq!(lo, Some(*start.as_datetime()));
        assert_eq!(hi, Some(*end.as_datetime()));
    }

    #[test]
    fn corrupt_record_names_the_field() {
        let err = corrupt("relationship", "unknown relationship 'maybe'");
        assert_eq!(
            format!("{}", err),
            "Corrupt record: relationship: unknown relationship 'maybe'"
        );
    }
}
