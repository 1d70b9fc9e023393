//! Reporting HTTP adapter module.
//!
//! Exposes the moral graph summary and vote statistics as read-only
//! JSON endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, VoteStatisticsResponse};
pub use handlers::ReportingAppState;
pub use routes::reporting_routes;
