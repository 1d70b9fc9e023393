//! Directed pair accumulator.
//!
//! Maps an ordered `(source, candidate)` pair of value ids to the raw
//! counts gathered for it during one summarization run. Records are created
//! lazily on first access, so a pair never appears without evidence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ContextId, ValueId};

/// Political tally for the direct votes on a pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticalTally {
    pub republican: u64,
    pub democrat: u64,
    pub other: u64,
}

/// Counters accumulated for one directed pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCounts {
    pub marked_wiser: u64,
    pub marked_not_wiser: u64,
    pub marked_unsure: u64,
    /// Upgrades shown in the opposite direction.
    pub marked_less_wise: u64,
    pub impressions: u64,
    pub politics: PoliticalTally,
}

impl EdgeCounts {
    /// Verdict counts in a fixed order, excluding impressions and politics.
    pub fn verdict_counts(&self) -> [u64; 4] {
        [
            self.marked_wiser,
            self.marked_not_wiser,
            self.marked_unsure,
            self.marked_less_wise,
        ]
    }

    /// Sum of all verdict counts.
    pub fn verdict_total(&self) -> u64 {
        self.verdict_counts().iter().sum()
    }
}

/// Raw evidence for the claim "`wiser_value_id` is wiser than `source_value_id`".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPairCount {
    pub source_value_id: ValueId,
    pub wiser_value_id: ValueId,
    /// Every context observed, duplicates included until cooking.
    pub contexts: Vec<ContextId>,
    pub counts: EdgeCounts,
}

impl RawPairCount {
    fn empty(source: ValueId, candidate: ValueId) -> Self {
        Self {
            source_value_id: source,
            wiser_value_id: candidate,
            contexts: Vec::new(),
            counts: EdgeCounts::default(),
        }
    }
}

/// Keyed store of [`RawPairCount`] records with get-or-create access.
#[derive(Debug, Default)]
pub struct PairMap {
    records: BTreeMap<(ValueId, ValueId), RawPairCount>,
}

impl PairMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `(source, candidate)`, creating a zeroed one
    /// on first access.
    pub fn get(&mut self, source: ValueId, candidate: ValueId) -> &mut RawPairCount {
        self.records
            .entry((source, candidate))
            .or_insert_with(|| RawPairCount::empty(source, candidate))
    }

    /// Looks up a record without creating it.
    pub fn peek(&self, source: ValueId, candidate: ValueId) -> Option<&RawPairCount> {
        self.records.get(&(source, candidate))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the map, yielding records ordered by `(source, candidate)`.
    pub fn into_records(self) -> Vec<RawPairCount> {
        self.records.into_values().collect()
    }
}
