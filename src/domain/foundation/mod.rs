//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and error types that form the
//! vocabulary of the moral graph domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{CaseId, ContextId, RunId, UserId, ValueId};
pub use timestamp::Timestamp;
