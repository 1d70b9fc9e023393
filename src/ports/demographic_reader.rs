//! Demographic reader port.

use async_trait::async_trait;

use crate::domain::graph::Demographic;
use crate::domain::scope::ParticipantScope;

use super::ReaderError;

/// Reader port for per-user demographic records.
#[async_trait]
pub trait DemographicReader: Send + Sync {
    /// Lists demographics of users admitted by the scope.
    async fn list_demographics(
        &self,
        participants: &ParticipantScope,
    ) -> Result<Vec<Demographic>, ReaderError>;
}
