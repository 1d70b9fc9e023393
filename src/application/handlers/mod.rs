//! Application handlers.
//!
//! Query handlers that resolve scopes, read from ports, and run the
//! pure domain pipelines.

pub mod graph;
pub mod votes;

mod reporting_error;
mod scope_resolver;

pub use graph::{SummarizeGraphHandler, SummarizeGraphQuery, SummarizeGraphResult};
pub use reporting_error::ReportingError;
pub use scope_resolver::ScopeResolver;
pub use votes::{ReportVoteStatisticsHandler, ReportVoteStatisticsQuery, ReportVoteStatisticsResult};
