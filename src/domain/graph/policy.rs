//! Significance thresholds deciding which edges are published.

use serde::{Deserialize, Serialize};

use super::cooking::CookedEdge;

/// Minimum number of direct "wiser" votes for an edge to be published.
pub const DEFAULT_MIN_WISER_VOTES: u64 = 2;

/// Minimum net consensus toward the candidate being wiser.
pub const DEFAULT_MIN_WISER_LIKELIHOOD: f64 = 0.33;

/// Maximum verdict entropy in bits (the ceiling for four categories is 2).
pub const DEFAULT_MAX_ENTROPY: f64 = 1.69;

/// Edge filter. All bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePolicy {
    pub min_wiser_votes: u64,
    pub min_wiser_likelihood: f64,
    pub max_entropy: f64,
}

impl Default for EdgePolicy {
    fn default() -> Self {
        Self {
            min_wiser_votes: DEFAULT_MIN_WISER_VOTES,
            min_wiser_likelihood: DEFAULT_MIN_WISER_LIKELIHOOD,
            max_entropy: DEFAULT_MAX_ENTROPY,
        }
    }
}

impl EdgePolicy {
    /// Returns true if the edge clears every threshold.
    pub fn admits(&self, edge: &CookedEdge) -> bool {
        edge.counts.marked_wiser >= self.min_wiser_votes
            && edge.summary.wiser_likelihood >= self.min_wiser_likelihood
            && edge.summary.entropy <= self.max_entropy
    }

    /// Keeps the admitted edges, preserving order.
    pub fn retain<'a>(&self, edges: impl IntoIterator<Item = &'a CookedEdge>) -> Vec<CookedEdge> {
        edges
            .into_iter()
            .filter(|edge| self.admits(edge))
            .cloned()
            .collect()
    }
}
