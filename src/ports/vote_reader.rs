//! Vote reader port.
//!
//! Votes and impressions are recorded per user and value, optionally under
//! a case. Both reads honor the same [`VoteScope`].

use async_trait::async_trait;

use crate::domain::scope::VoteScope;
use crate::domain::votes::{Impression, Vote};

use super::ReaderError;

/// Reader port for vote and impression events.
#[async_trait]
pub trait VoteReader: Send + Sync {
    async fn list_votes(&self, scope: &VoteScope) -> Result<Vec<Vote>, ReaderError>;

    async fn list_impressions(&self, scope: &VoteScope) -> Result<Vec<Impression>, ReaderError>;
}
