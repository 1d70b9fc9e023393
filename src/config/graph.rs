//! Graph publication thresholds

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::graph::{
    EdgePolicy, DEFAULT_MAX_ENTROPY, DEFAULT_MIN_WISER_LIKELIHOOD, DEFAULT_MIN_WISER_VOTES,
};
use crate::domain::votes::DEFAULT_MIN_POLITICAL_SAMPLES;

/// Thresholds for edge publication and political breakdowns
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Minimum direct "wiser" votes per published edge
    #[serde(default = "default_min_wiser_votes")]
    pub min_wiser_votes: u64,

    /// Minimum wiser-likelihood per published edge (-1.0 to 1.0)
    #[serde(default = "default_min_wiser_likelihood")]
    pub min_wiser_likelihood: f64,

    /// Maximum verdict entropy in bits (0.0 to 2.0)
    #[serde(default = "default_max_entropy")]
    pub max_entropy: f64,

    /// Minimum voter samples before politics are reported
    #[serde(default = "default_min_political_samples")]
    pub min_political_samples: usize,
}

impl GraphConfig {
    pub fn edge_policy(&self) -> EdgePolicy {
        EdgePolicy {
            min_wiser_votes: self.min_wiser_votes,
            min_wiser_likelihood: self.min_wiser_likelihood,
            max_entropy: self.max_entropy,
        }
    }

    /// Validate graph thresholds
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-1.0..=1.0).contains(&self.min_wiser_likelihood) {
            return Err(ValidationError::InvalidThreshold("min_wiser_likelihood"));
        }
        if !(0.0..=2.0).contains(&self.max_entropy) {
            return Err(ValidationError::InvalidThreshold("max_entropy"));
        }
        if self.min_political_samples == 0 {
            return Err(ValidationError::InvalidThreshold("min_political_samples"));
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            min_wiser_votes: default_min_wiser_votes(),
            min_wiser_likelihood: default_min_wiser_likelihood(),
            max_entropy: default_max_entropy(),
            min_political_samples: default_min_political_samples(),
        }
    }
}

fn default_min_wiser_votes() -> u64 {
    DEFAULT_MIN_WISER_VOTES
}

fn default_min_wiser_likelihood() -> f64 {
    DEFAULT_MIN_WISER_LIKELIHOOD
}

fn default_max_entropy() -> f64 {
    DEFAULT_MAX_ENTROPY
}

fn default_min_political_samples() -> usize {
    DEFAULT_MIN_POLITICAL_SAMPLES
}
