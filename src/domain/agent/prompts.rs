use crate::domain::llm::{LlmRequest, Message};

pub const ROUTER_SYSTEM_PROMPT: &str =
    "Route the input to RAG if it is related to crops. If not, route the input to LLM.";

pub const ANSWER_SYSTEM_PROMPT: &str = "You are a helpful assistant. Answer the user's question clearly and concisely.";

const CONTEXT_PREAMBLE: &str = "Answer using the reference passages below. \
Each passage is prefixed with its source document and section; cite them when you rely on a passage. \
If the passages do not cover the question, say so and answer from general knowledge.";

/// Build the final answer request, injecting retrieved context when there is any
pub fn build_answer_request(query: &str, context: &str, temperature: Option<f32>) -> LlmRequest {
    let mut builder = LlmRequest::builder().system(ANSWER_SYSTEM_PROMPT);

    if !context.is_empty() {
        builder = builder.message(Message::system(format!(
            "{}\n\n{}",
            CONTEXT_PREAMBLE, context
        )));
    }

    builder.user(query).maybe_temperature(temperature).build()
}
