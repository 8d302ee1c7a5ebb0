//! LLM-based query router
//!
//! Asks a chat model for a structured `{"step": "RAG" | "LLM"}` verdict.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::agent::ROUTER_SYSTEM_PROMPT;
use crate::domain::llm::{LlmJsonSchema, LlmProvider, LlmRequest};
use crate::domain::routing::{QueryRouter, RouteDecision};
use crate::domain::DomainError;

/// Router that classifies queries with a chat model
#[derive(Debug, Clone)]
pub struct LlmQueryRouter {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl LlmQueryRouter {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    fn route_schema() -> LlmJsonSchema {
        LlmJsonSchema::strict(
            "route",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "step": {
                        "type": "string",
                        "enum": ["RAG", "LLM"],
                        "description": "The next step in the routing process"
                    }
                },
                "required": ["step"],
                "additionalProperties": false
            }),
        )
    }

    fn parse_decision(content: &str) -> RouteDecision {
        let json_str = extract_json(content).unwrap_or(content);

        match serde_json::from_str::<RouteOutput>(json_str) {
            Ok(output) => RouteDecision::from_label(output.step.as_deref().unwrap_or("")),
            Err(e) => {
                warn!("Router reply was not structured ({}), reading it as a bare label", e);
                RouteDecision::from_label(content)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteOutput {
    step: Option<String>,
}

/// Extract a JSON object from a string (handles markdown code fences)
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    (start < end).then(|| &text[start..=end])
}

#[async_trait]
impl QueryRouter for LlmQueryRouter {
    async fn classify(&self, query: &str) -> Result<RouteDecision, DomainError> {
        let request = LlmRequest::builder()
            .system(ROUTER_SYSTEM_PROMPT)
            .user(query)
            .temperature(0.0)
            .json_schema(Self::route_schema())
            .build();

        let response = self.provider.chat(&self.model, request).await?;
        let decision = Self::parse_decision(response.content());

        debug!(model = %self.model, reply = response.content(), ?decision, "Router replied");

        Ok(decision)
    }

    fn router_name(&self) -> &'static str {
        "llm"
    }
}
