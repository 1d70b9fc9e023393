//! Judgement reader port.
//!
//! Read-only access to the value catalogue and the judgements made between
//! values. Each call is one bulk read; the graph pipeline never pages.

use async_trait::async_trait;

use crate::domain::graph::{Judgement, Value};
use crate::domain::scope::JudgementFilter;

use super::ReaderError;

/// Reader port for values and judgements.
#[async_trait]
pub trait JudgementReader: Send + Sync {
    /// Lists every canonical value.
    async fn list_values(&self) -> Result<Vec<Value>, ReaderError>;

    /// Lists judgements matching the filter.
    async fn list_judgements(&self, filter: &JudgementFilter) -> Result<Vec<Judgement>, ReaderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockJudgementReader;

    #[async_trait]
    impl JudgementReader for MockJudgementReader {
        async fn list_values(&self) -> Result<Vec<Value>, ReaderError> {
            Ok(vec![])
        }

        async fn list_judgements(
            &self,
            _filter: &JudgementFilter,
        ) -> Result<Vec<Judgement>, ReaderError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_reader_trait_is_object_safe() {
        let _reader: Box<dyn JudgementReader> = Box::new(MockJudgementReader);
    }
}
