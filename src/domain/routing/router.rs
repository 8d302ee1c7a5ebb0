use async_trait::async_trait;
use std::fmt::Debug;

use super::RouteDecision;
use crate::domain::DomainError;

/// Classifies a query into a routing decision
#[async_trait]
pub trait QueryRouter: Send + Sync + Debug {
    async fn classify(&self, query: &str) -> Result<RouteDecision, DomainError>;

    fn router_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Always answers with the same decision
    #[derive(Debug)]
    pub struct MockQueryRouter {
        decision: Result<RouteDecision, String>,
    }

    impl MockQueryRouter {
        pub fn new(decision: RouteDecision) -> Self {
            Self {
                decision: Ok(decision),
            }
        }

        pub fn failing(error: impl Into<String>) -> Self {
            Self {
                decision: Err(error.into()),
            }
        }
    }

    #[async_trait]
    impl QueryRouter for MockQueryRouter {
        async fn classify(&self, _query: &str) -> Result<RouteDecision, DomainError> {
            self.decision
                .clone()
                .map_err(|e| DomainError::provider("mock_router", e))
        }

        fn router_name(&self) -> &'static str {
            "mock"
        }
    }
}
