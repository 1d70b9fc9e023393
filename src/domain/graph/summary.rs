//! Graph assembly: the published summary and the pipeline that builds it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValueId;

use super::cooking::{CookedEdge, EdgeCooker};
use super::folding::JudgementFolder;
use super::policy::EdgePolicy;
use super::records::{Demographic, Judgement, Value};

/// The published moral graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoralGraphSummary {
    /// Values referenced by at least one published edge.
    pub values: Vec<Value>,
    pub edges: Vec<CookedEdge>,
    /// Every cooked edge, filtered or not. Present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_edges: Option<Vec<CookedEdge>>,
}

impl MoralGraphSummary {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.edges.is_empty()
    }
}

/// Filters cooked edges and derives the minimal node set.
pub struct GraphAssembler;

impl GraphAssembler {
    pub fn assemble(
        catalogue: Vec<Value>,
        cooked: Vec<CookedEdge>,
        policy: &EdgePolicy,
        include_all_edges: bool,
    ) -> MoralGraphSummary {
        let edges = policy.retain(&cooked);

        let referenced: HashSet<ValueId> = edges
            .iter()
            .flat_map(|edge| [edge.source_value_id, edge.wiser_value_id])
            .collect();

        let values = catalogue
            .into_iter()
            .filter(|value| referenced.contains(&value.id))
            .collect();

        MoralGraphSummary {
            values,
            edges,
            all_edges: include_all_edges.then_some(cooked),
        }
    }
}

/// Runs fold, cook, filter, and assemble over materialized inputs.
pub fn summarize(
    values: Vec<Value>,
    judgements: &[Judgement],
    demographics: &[Demographic],
    policy: &EdgePolicy,
    include_all_edges: bool,
) -> MoralGraphSummary {
    let pairs = JudgementFolder::new(judgements, demographics).fold();
    tracing::debug!(
        judgements = judgements.len(),
        pairs = pairs.len(),
        "folded judgements into directed pairs"
    );

    let cooked = EdgeCooker::cook_all(pairs.into_records());
    let summary = GraphAssembler::assemble(values, cooked, policy, include_all_edges);
    tracing::debug!(
        values = summary.values.len(),
        edges = summary.edges.len(),
        "assembled moral graph"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ContextId, UserId};
    use crate::domain::graph::records::Relationship;

    fn value(id: i64) -> Value {
        Value {
            id: ValueId::new(id),
            title: format!("Value {}", id),
            instructions_short: String::new(),
            instructions_detailed: String::new(),
            evaluation_criteria: vec![],
        }
    }

    fn judgements(from: i64, to: i64, relationship: Relationship, n: usize, first_user: i64) -> Vec<Judgement> {
        (0..n)
            .map(|i| {
                Judgement::new(
                    UserId::new(first_user + i as i64),
                    ValueId::new(from),
                    ValueId::new(to),
                    ContextId::new("ctx").unwrap(),
                    relationship,
                )
            })
            .collect()
    }

    #[test]
    fn empty_inputs_give_empty_summary() {
        let summary = summarize(vec![value(1), value(2)], &[], &[], &EdgePolicy::default(), false);
        assert!(summary.is_empty());
        assert!(summary.all_edges.is_none());
    }

    #[test]
    fn scenario_edge_is_published() {
        let mut input = judgements(1, 2, Relationship::Upgrade, 3, 0);
        input.extend(judgements(1, 2, Relationship::NoUpgrade, 1, 10));
        input.extend(judgements(2, 1, Relationship::Upgrade, 1, 20));

        let summary = summarize(
            vec![value(1), value(2), value(3)],
            &input,
            &[],
            &EdgePolicy::default(),
            true,
        );

        assert_eq!(summary.edges.len(), 1);
        let edge = &summary.edges[0];
        assert_eq!(edge.source_value_id, ValueId::new(1));
        assert_eq!(edge.wiser_value_id, ValueId::new(2));
        assert!((edge.summary.wiser_likelihood - 0.4).abs() < 1e-12);
        assert!(edge.summary.entropy <= 1.69);

        let ids: Vec<_> = summary.values.iter().map(|v| v.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(summary.all_edges.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn summary_has_no_isolated_nodes() {
        let mut input = judgements(1, 2, Relationship::Upgrade, 4, 0);
        input.extend(judgements(3, 4, Relationship::Upgrade, 1, 10));
        input.extend(judgements(5, 6, Relationship::NotSure, 3, 20));

        let catalogue = (1..=7).map(value).collect();
        let summary = summarize(catalogue, &input, &[], &EdgePolicy::default(), false);

        for value in &summary.values {
            assert!(summary.edges.iter().any(|e| e.references(value.id)));
        }
        for edge in &summary.edges {
            assert!(summary.values.iter().any(|v| v.id == edge.source_value_id));
            assert!(summary.values.iter().any(|v| v.id == edge.wiser_value_id));
        }
    }

    #[test]
    fn split_verdicts_are_filtered_out() {
        let mut input = judgements(1, 2, Relationship::Upgrade, 3, 0);
        input.extend(judgements(1, 2, Relationship::NoUpgrade, 3, 10));
        input.extend(judgements(1, 2, Relationship::NotSure, 3, 20));
        input.extend(judgements(2, 1, Relationship::Upgrade, 3, 30));

        let summary = summarize(vec![value(1), value(2)], &input, &[], &EdgePolicy::default(), false);
        assert!(summary.edges.is_empty());
        assert!(summary.values.is_empty());
    }

    #[test]
    fn all_edges_omitted_from_json_unless_requested() {
        let summary = summarize(vec![], &[], &[], &EdgePolicy::default(), false);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("allEdges").is_none());

        let summary = summarize(vec![], &[], &[], &EdgePolicy::default(), true);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["allEdges"], serde_json::json!([]));
    }
}
