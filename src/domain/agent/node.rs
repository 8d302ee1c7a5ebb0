use serde::Serialize;

use crate::domain::retrieval::RetrievalOutcome;
use crate::domain::routing::Route;

/// A step of the routing graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentNode {
    Router,
    Rag,
    Llm,
    End,
}

/// Request-scoped state threaded through the graph
#[derive(Debug, Clone)]
pub struct AgentState {
    pub input: String,
    pub route: Option<Route>,
    pub retrieval: Option<RetrievalOutcome>,
    pub answer: Option<String>,
    pub path: Vec<AgentNode>,
}

impl AgentState {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            route: None,
            retrieval: None,
            answer: None,
            path: Vec::new(),
        }
    }

    /// Context collected by the rag node, empty if it never ran or found nothing
    pub fn context(&self) -> &str {
        self.retrieval
            .as_ref()
            .map(RetrievalOutcome::prompt)
            .unwrap_or("")
    }
}
