//! Vote statistics query handlers.

mod report_vote_statistics;

pub use report_vote_statistics::{
    ReportVoteStatisticsHandler, ReportVoteStatisticsQuery, ReportVoteStatisticsResult,
};
