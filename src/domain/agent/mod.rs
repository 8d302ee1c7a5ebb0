//! The routing agent: router → {rag, llm}, rag → llm, llm → end

mod node;
mod prompts;
mod response;
mod runner;

pub use node::{AgentNode, AgentState};
pub use prompts::{build_answer_request, ANSWER_SYSTEM_PROMPT, ROUTER_SYSTEM_PROMPT};
pub use response::AgentResponse;
pub use runner::{AgentSettings, RagAgent};
