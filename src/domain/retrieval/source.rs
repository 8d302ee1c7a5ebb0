use std::fmt::Debug;

use async_trait::async_trait;

use super::index::KnowledgeIndex;
use crate::domain::DomainError;

/// Where the section and chunk indices come from
#[async_trait]
pub trait IndexSource: Send + Sync + Debug {
    /// Load and validate both indices
    async fn load(&self) -> Result<KnowledgeIndex, DomainError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}
