//! Per-value vote statistics with a political breakdown of the voters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CaseId, UserId, ValueId};
use crate::domain::graph::{Affiliation, Demographic};

/// Minimum number of voter samples before a political breakdown is reported.
pub const DEFAULT_MIN_POLITICAL_SAMPLES: usize = 3;

/// A user endorsing a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub user_id: UserId,
    pub value_id: ValueId,
    #[serde(default)]
    pub case_id: Option<CaseId>,
}

/// A value having been shown to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Impression {
    pub user_id: UserId,
    pub value_id: ValueId,
    #[serde(default)]
    pub case_id: Option<CaseId>,
}

/// Majority affiliation among a value's voters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticsSummary {
    pub affiliation: Affiliation,
    pub affiliation_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticsCounts {
    pub democrat: u64,
    pub republican: u64,
    /// Every sample that is neither republican nor democrat.
    pub independent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Politics {
    /// Absent on a tie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<PoliticsSummary>,
    pub counts: PoliticsCounts,
}

impl Politics {
    /// Tallies voter samples. `None` marks a voter without a demographic
    /// record; it counts as a sample but lands in `independent`.
    ///
    /// Returns `None` when there are fewer than `min_samples` samples.
    pub fn from_samples(samples: &[Option<Affiliation>], min_samples: usize) -> Option<Self> {
        if samples.is_empty() || samples.len() < min_samples {
            return None;
        }

        let mut counts = PoliticsCounts::default();
        for sample in samples.iter().flatten() {
            match sample {
                Affiliation::Republican => counts.republican += 1,
                Affiliation::Democrat => counts.democrat += 1,
                Affiliation::Independent | Affiliation::Unknown => {}
            }
        }

        let total = samples.len() as u64;
        counts.independent = total - counts.republican - counts.democrat;

        let summary = if counts.republican > counts.democrat {
            Some(PoliticsSummary {
                affiliation: Affiliation::Republican,
                affiliation_percentage: counts.republican as f64 / total as f64,
            })
        } else if counts.democrat > counts.republican {
            Some(PoliticsSummary {
                affiliation: Affiliation::Democrat,
                affiliation_percentage: counts.democrat as f64 / total as f64,
            })
        } else {
            None
        };

        Some(Self { summary, counts })
    }
}

/// Statistics for one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteStatistics {
    pub value_id: ValueId,
    pub votes: u64,
    pub impressions: u64,
    pub vote_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub politics: Option<Politics>,
}

/// Builds [`VoteStatistics`] for every value with at least one impression.
pub struct VoteStatisticsReporter {
    min_political_samples: usize,
}

impl Default for VoteStatisticsReporter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_POLITICAL_SAMPLES)
    }
}

impl VoteStatisticsReporter {
    pub fn new(min_political_samples: usize) -> Self {
        Self {
            min_political_samples,
        }
    }

    /// Values are reported in the order their first impression appears.
    pub fn report(
        &self,
        votes: &[Vote],
        impressions: &[Impression],
        demographics: &[Demographic],
    ) -> Vec<VoteStatistics> {
        let mut affiliations: HashMap<UserId, Affiliation> = HashMap::new();
        for demographic in demographics {
            affiliations
                .entry(demographic.user_id)
                .or_insert_with(|| demographic.affiliation());
        }

        let mut order: Vec<ValueId> = Vec::new();
        let mut impression_counts: HashMap<ValueId, u64> = HashMap::new();
        for impression in impressions {
            let count = impression_counts.entry(impression.value_id).or_insert_with(|| {
                order.push(impression.value_id);
                0
            });
            *count += 1;
        }

        let mut voters: HashMap<ValueId, Vec<Option<Affiliation>>> = HashMap::new();
        for vote in votes {
            voters
                .entry(vote.value_id)
                .or_default()
                .push(affiliations.get(&vote.user_id).copied());
        }

        order
            .into_iter()
            .map(|value_id| {
                let impressions = impression_counts.get(&value_id).copied().unwrap_or(0);
                let samples = voters.remove(&value_id).unwrap_or_default();
                let votes = samples.len() as u64;
                let vote_percentage = if impressions == 0 {
                    0.0
                } else {
                    votes as f64 / impressions as f64
                };

                VoteStatistics {
                    value_id,
                    votes,
                    impressions,
                    vote_percentage,
                    politics: Politics::from_samples(&samples, self.min_political_samples),
                }
            })
            .collect()
    }
}
