//! Input records consumed by the graph pipeline.
//!
//! These mirror what the external judgement store holds. They are read
//! once per summarization run and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ContextId, RunId, UserId, ValidationError, ValueId};

/// A canonical value-statement node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub id: ValueId,
    pub title: String,
    pub instructions_short: String,
    pub instructions_detailed: String,
    #[serde(default)]
    pub evaluation_criteria: Vec<String>,
}

/// Outcome of comparing a source value against a target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// The target was judged wiser than the source.
    Upgrade,
    /// The target was judged not wiser than the source.
    NoUpgrade,
    NotSure,
}

impl Relationship {
    /// Returns the stored label for this relationship.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Upgrade => "upgrade",
            Relationship::NoUpgrade => "no_upgrade",
            Relationship::NotSure => "not_sure",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upgrade" => Ok(Relationship::Upgrade),
            "no_upgrade" => Ok(Relationship::NoUpgrade),
            "not_sure" => Ok(Relationship::NotSure),
            other => Err(ValidationError::invalid_format(
                "relationship",
                format!("unknown relationship '{}'", other),
            )),
        }
    }
}

/// One user's directional comparison of two values in a context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judgement {
    pub user_id: UserId,
    pub from_id: ValueId,
    pub to_id: ValueId,
    pub context_id: ContextId,
    pub relationship: Relationship,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub run_id: Option<RunId>,
}

impl Judgement {
    /// Creates a judgement without comment or run annotation.
    pub fn new(
        user_id: UserId,
        from_id: ValueId,
        to_id: ValueId,
        context_id: ContextId,
        relationship: Relationship,
    ) -> Self {
        Self {
            user_id,
            from_id,
            to_id,
            context_id,
            relationship,
            comment: None,
            run_id: None,
        }
    }
}

/// Political affiliation as tallied by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    Republican,
    Democrat,
    Independent,
    /// Missing or unrecognized label.
    Unknown,
}

impl Affiliation {
    /// Classifies a free-form label, case-insensitively.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("republican") => Affiliation::Republican,
            Some("democrat") => Affiliation::Democrat,
            Some("independent") => Affiliation::Independent,
            _ => Affiliation::Unknown,
        }
    }
}

/// Per-user demographic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographic {
    pub user_id: UserId,
    #[serde(default)]
    pub us_political_affiliation: Option<String>,
}

impl Demographic {
    pub fn new(user_id: UserId, affiliation: Option<&str>) -> Self {
        Self {
            user_id,
            us_political_affiliation: affiliation.map(String::from),
        }
    }

    pub fn affiliation(&self) -> Affiliation {
        Affiliation::from_label(self.us_political_affiliation.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_parses_stored_labels() {
        assert_eq!("upgrade".parse::<Relationship>().unwrap(), Relationship::Upgrade);
        assert_eq!("no_upgrade".parse::<Relationship>().unwrap(), Relationship::NoUpgrade);
        assert_eq!("not_sure".parse::<Relationship>().unwrap(), Relationship::NotSure);
        assert!("downgrade".parse::<Relationship>().is_err());
    }

    #[test]
    fn relationship_serializes_snake_case() {
        let json = serde_json::to_string(&Relationship::NoUpgrade).unwrap();
        assert_eq!(json, "\"no_upgrade\"");
    }

    #[test]
    fn affiliation_matches_case_insensitively() {
        assert_eq!(Affiliation::from_label(Some("Republican")), Affiliation::Republican);
        assert_eq!(Affiliation::from_label(Some("DEMOCRAT")), Affiliation::Democrat);
        assert_eq!(Affiliation::from_label(Some("independent")), Affiliation::Independent);
        assert_eq!(Affiliation::from_label(Some("green")), Affiliation::Unknown);
        assert_eq!(Affiliation::from_label(None), Affiliation::Unknown);
    }

    #[test]
    fn judgement_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "userId": 7,
            "fromId": 1,
            "toId": 2,
            "contextId": "grief",
            "relationship": "upgrade"
        });
        let judgement: Judgement = serde_json::from_value(json).unwrap();
        assert_eq!(judgement.from_id, ValueId::new(1));
        assert_eq!(judgement.relationship, Relationship::Upgrade);
        assert!(judgement.comment.is_none());
    }
}
