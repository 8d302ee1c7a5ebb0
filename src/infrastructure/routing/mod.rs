//! Query router implementations

mod llm_router;

pub use llm_router::LlmQueryRouter;
