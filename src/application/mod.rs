//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation here is a read-side query; nothing is written back.

pub mod handlers;

pub use handlers::{
    ReportVoteStatisticsHandler, ReportVoteStatisticsQuery, ReportingError, ScopeResolver,
    SummarizeGraphHandler, SummarizeGraphQuery,
};
