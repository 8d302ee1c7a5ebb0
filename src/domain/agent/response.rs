use serde::Serialize;
use uuid::Uuid;

use super::node::AgentNode;
use crate::domain::retrieval::RetrievalOutcome;
use crate::domain::routing::Route;

/// Final result of one agent run
#[derive(Debug, Clone, Serialize)]
pub struct AgentResponse {
    pub request_id: Uuid,
    pub answer: String,
    pub route: Route,
    /// `None` when the query was answered without the rag node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval: Option<RetrievalOutcome>,
    pub path: Vec<AgentNode>,
}

impl AgentResponse {
    /// The rag node ran but found nothing to inject
    pub fn retrieval_was_empty(&self) -> bool {
        self.retrieval
            .as_ref()
            .is_some_and(RetrievalOutcome::is_empty)
    }
}
