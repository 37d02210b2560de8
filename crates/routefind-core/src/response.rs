//! Structured replies for route queries
//!
//! A successful query renders the full edge set, the route as consecutive
//! hop pairs and the total cost. Failures render an error envelope carrying
//! an HTTP-style status.

use serde::Serialize;

use crate::error::RouteError;
use crate::graph::{EdgeSpec, NodeId, PathResult, Weight};

/// One input edge as echoed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeEntry {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: i64,
}

impl From<&EdgeSpec> for EdgeEntry {
    fn from(edge: &EdgeSpec) -> Self {
        Self {
            source: edge.from,
            target: edge.to,
            weight: edge.weight,
        }
    }
}

/// One hop of the route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteHop {
    pub source: NodeId,
    pub target: NodeId,
}

/// Reply for a route query; `route_cost` is null when no route exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    pub edges: Vec<EdgeEntry>,
    pub route: Vec<RouteHop>,
    pub route_cost: Option<Weight>,
    pub reachable: bool,
}

impl RouteResponse {
    pub fn new(edges: &[EdgeSpec], outcome: Option<&PathResult>) -> Self {
        let route: Vec<RouteHop> = outcome
            .map(|result| {
                result
                    .path
                    .windows(2)
                    .map(|pair| RouteHop {
                        source: pair[0],
                        target: pair[1],
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            edges: edges.iter().map(EdgeEntry::from).collect(),
            route,
            route_cost: outcome.map(|result| result.cost),
            reachable: outcome.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: i32,
    pub status: u16,
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// Error envelope: `{"error": {"status", "type", "message"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl From<&RouteError> for ErrorResponse {
    fn from(err: &RouteError) -> Self {
        Self {
            error: ErrorBody {
                code: err.exit_code().into(),
                status: err.status(),
                error_type: err.error_type().to_string(),
                message: err.to_string(),
            },
        }
    }
}
