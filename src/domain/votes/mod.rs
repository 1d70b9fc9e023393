//! Votes Module - Per-value endorsement rates and voter politics.

mod statistics;

pub use statistics::{
    Impression, Politics, PoliticsCounts, PoliticsSummary, Vote, VoteStatistics,
    VoteStatisticsReporter, DEFAULT_MIN_POLITICAL_SAMPLES,
};
