use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Branch taken after the router node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Retrieve supporting passages before answering
    #[serde(rename = "RAG")]
    Rag,
    /// Answer directly
    #[serde(rename = "LLM")]
    Llm,
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Rag => "RAG",
            Route::Llm => "LLM",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the routing oracle answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Rag,
    Llm,
    /// The oracle produced a label outside the two known routes
    Unclassified(String),
}

impl RouteDecision {
    /// Map a raw label onto a decision. Surrounding whitespace and case are ignored.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();

        if trimmed.eq_ignore_ascii_case("RAG") {
            Self::Rag
        } else if trimmed.eq_ignore_ascii_case("LLM") {
            Self::Llm
        } else {
            Self::Unclassified(trimmed.to_string())
        }
    }

    /// Resolve to a concrete route, applying the policy for unknown labels
    pub fn resolve(self, policy: UnclassifiedRoutePolicy) -> Result<Route, DomainError> {
        match self {
            Self::Rag => Ok(Route::Rag),
            Self::Llm => Ok(Route::Llm),
            Self::Unclassified(label) => match policy {
                UnclassifiedRoutePolicy::Rag => Ok(Route::Rag),
                UnclassifiedRoutePolicy::Llm => Ok(Route::Llm),
                UnclassifiedRoutePolicy::Fail => Err(DomainError::unclassified_route(label)),
            },
        }
    }
}

/// What to do when the router answers with neither route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnclassifiedRoutePolicy {
    Rag,
    Llm,
    #[default]
    Fail,
}
