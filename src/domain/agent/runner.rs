use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use super::node::{AgentNode, AgentState};
use super::prompts::build_answer_request;
use super::response::AgentResponse;
use crate::domain::llm::LlmProvider;
use crate::domain::retrieval::RetrievalPipeline;
use crate::domain::routing::{QueryRouter, Route, UnclassifiedRoutePolicy};
use crate::domain::DomainError;

/// Knobs for the answer step and routing fallback
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub answer_model: String,
    pub temperature: Option<f32>,
    pub unclassified: UnclassifiedRoutePolicy,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            answer_model: "gpt-4o-mini".to_string(),
            temperature: None,
            unclassified: UnclassifiedRoutePolicy::default(),
        }
    }
}

/// Routes each query, optionally retrieves context, then answers it
#[derive(Debug, Clone)]
pub struct RagAgent {
    router: Arc<dyn QueryRouter>,
    retrieval: RetrievalPipeline,
    llm: Arc<dyn LlmProvider>,
    settings: AgentSettings,
}

impl RagAgent {
    pub fn new(
        router: Arc<dyn QueryRouter>,
        retrieval: RetrievalPipeline,
        llm: Arc<dyn LlmProvider>,
        settings: AgentSettings,
    ) -> Self {
        Self {
            router,
            retrieval,
            llm,
            settings,
        }
    }

    pub fn retrieval(&self) -> &RetrievalPipeline {
        &self.retrieval
    }

    /// Answer one query end to end
    pub async fn run(&self, query: &str) -> Result<AgentResponse, DomainError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("agent_run", %request_id);

        async move {
            let state = self.execute(AgentState::new(query)).await?;
            self.finish(request_id, state)
        }
        .instrument(span)
        .await
    }

    async fn execute(&self, mut state: AgentState) -> Result<AgentState, DomainError> {
        let mut node = AgentNode::Router;

        loop {
            state.path.push(node);
            debug!(?node, "Entering node");

            node = match node {
                AgentNode::Router => match self.route(&state.input).await? {
                    Route::Rag => {
                        state.route = Some(Route::Rag);
                        AgentNode::Rag
                    }
                    Route::Llm => {
                        state.route = Some(Route::Llm);
                        AgentNode::Llm
                    }
                },
                AgentNode::Rag => {
                    state.retrieval = Some(self.retrieval.retrieve(&state.input).await?);
                    AgentNode::Llm
                }
                AgentNode::Llm => {
                    state.answer = Some(self.answer(&state).await?);
                    AgentNode::End
                }
                AgentNode::End => return Ok(state),
            };
        }
    }

    async fn route(&self, query: &str) -> Result<Route, DomainError> {
        let decision = self.router.classify(query).await?;
        let route = decision.clone().resolve(self.settings.unclassified)?;

        info!(?decision, %route, router = self.router.router_name(), "Query routed");

        Ok(route)
    }

    async fn answer(&self, state: &AgentState) -> Result<String, DomainError> {
        let request =
            build_answer_request(&state.input, state.context(), self.settings.temperature);

        let response = self.llm.chat(&self.settings.answer_model, request).await?;

        debug!(
            model = %response.model,
            finish_reason = ?response.finish_reason,
            "Answer generated"
        );

        Ok(response.content().to_string())
    }

    fn finish(&self, request_id: Uuid, state: AgentState) -> Result<AgentResponse, DomainError> {
        let (Some(route), Some(answer)) = (state.route, state.answer) else {
            return Err(DomainError::validation(
                "Agent finished without a route and an answer",
            ));
        };

        Ok(AgentResponse {
            request_id,
            answer,
            route,
            retrieval: state.retrieval,
            path: state.path,
        })
    }
}
