//! Turns raw pair records into scored edges.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ContextId, ValueId};

use super::entropy::shannon_entropy;
use super::pair_map::{EdgeCounts, RawPairCount};

/// Derived consensus measures for one edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSummary {
    /// `(wiser - less_wise) / total`, in `[-1, 1]`; 0 when there are no verdicts.
    pub wiser_likelihood: f64,
    /// Entropy of the four verdict counts, in bits.
    pub entropy: f64,
}

/// A raw pair record with deduplicated contexts and its [`EdgeSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookedEdge {
    pub source_value_id: ValueId,
    pub wiser_value_id: ValueId,
    pub contexts: Vec<ContextId>,
    pub counts: EdgeCounts,
    pub summary: EdgeSummary,
}

impl CookedEdge {
    pub fn references(&self, id: ValueId) -> bool {
        self.source_value_id == id || self.wiser_value_id == id
    }
}

/// Scores raw pair records.
pub struct EdgeCooker;

impl EdgeCooker {
    /// Cooks every record, preserving input order.
    pub fn cook_all(records: Vec<RawPairCount>) -> Vec<CookedEdge> {
        records.into_iter().map(Self::cook).collect()
    }

    pub fn cook(record: RawPairCount) -> CookedEdge {
        let summary = Self::summarize(&record.counts);
        CookedEdge {
            source_value_id: record.source_value_id,
            wiser_value_id: record.wiser_value_id,
            contexts: dedupe_contexts(record.contexts),
            counts: record.counts,
            summary,
        }
    }

    /// Computes likelihood and entropy from verdict counts alone.
    pub fn summarize(counts: &EdgeCounts) -> EdgeSummary {
        let total = counts.verdict_total();
        let wiser_likelihood = if total == 0 {
            0.0
        } else {
            (counts.marked_wiser as f64 - counts.marked_less_wise as f64) / total as f64
        };

        EdgeSummary {
            wiser_likelihood,
            entropy: shannon_entropy(&counts.verdict_counts()),
        }
    }
}

/// Removes duplicate contexts, keeping first-seen order.
fn dedupe_contexts(contexts: Vec<ContextId>) -> Vec<ContextId> {
    let mut seen = HashSet::with_capacity(contexts.len());
    contexts
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
