//! Error type shared by the read-only store ports.

/// Errors raised while reading from the judgement store.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for ReaderError {
    fn from(err: sqlx::Error) -> Self {
        ReaderError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_from_sqlx() {
        let reader_error: ReaderError = sqlx::Error::RowNotFound.into();

        match reader_error {
            ReaderError::Database(_) => {}
            _ => panic!("Expected Database error"),
        }
    }

    #[test]
    fn test_error_messages() {
        let error = ReaderError::InvalidInput("blank case id".to_string());
        assert_eq!(format!("{}", error), "Invalid input: blank case id");

        let error = ReaderError::CorruptRecord("relationship 'maybe'".to_string());
        assert!(format!("{}", error).starts_with("Corrupt record"));
    }
}
