//! HTTP adapters - REST API implementations.

pub mod reporting;

pub use reporting::reporting_routes;
pub use reporting::ReportingAppState;
