//! Errors surfaced by the reporting query handlers.

use crate::domain::foundation::{RunId, ValidationError};
use crate::ports::ReaderError;

/// Errors that can occur while building a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportingError {
    #[error("Unknown run: {0}")]
    UnknownRun(RunId),

    #[error("Invalid scope: {0}")]
    InvalidScope(#[from] ValidationError),

    #[error("Store read failed: {0}")]
    Store(#[from] ReaderError),
}

impl ReportingError {
    /// True for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        match self {
            ReportingError::UnknownRun(_) | ReportingError::InvalidScope(_) => true,
            ReportingError::Store(ReaderError::InvalidInput(_)) => true,
            ReportingError::Store(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_run_is_client_error() {
        let err = ReportingError::UnknownRun(RunId::new("pilot").unwrap());
        assert!(err.is_client_error());
        assert_eq!(format!("{}", err), "Unknown run: pilot");
    }

    #[test]
    fn database_failure_is_server_error() {
        let err: ReportingError = ReaderError::Database("connection reset".to_string()).into();
        assert!(!err.is_client_error());
    }

    #[test]
    fn validation_error_converts() {
        let err: ReportingError = ValidationError::empty_field("case_id").into();
        assert!(matches!(err, ReportingError::InvalidScope(_)));
    }
}
