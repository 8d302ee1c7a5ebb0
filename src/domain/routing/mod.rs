//! Query routing: decide whether a query needs retrieval

mod decision;
mod router;

pub use decision::{Route, RouteDecision, UnclassifiedRoutePolicy};
pub use router::QueryRouter;

#[cfg(test)]
pub use router::mock::MockQueryRouter;
