//! Route queries over a built flight network.
//!
//! [`shortest_route`] is the main entry point: it resolves the requested
//! airport codes against the graph, runs Dijkstra, and packages the result as
//! a [`RoutePlan`]. Queries never mutate the graph, so a single graph value
//! can serve any number of requests.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{ConnectivityPolicy, Graph};
use crate::path::find_route_dijkstra;

/// Number of fuzzy suggestions offered for an unknown airport code.
const MAX_SUGGESTIONS: usize = 3;

/// A request for the shortest route between two airport codes.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
}

impl RouteRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Connectivity policy of the graph that answered the query.
    pub policy: ConnectivityPolicy,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub total_km: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a requested airport code against the graph.
///
/// Lookup is exact first, then retried uppercased so lowercase IATA input
/// still resolves. Unknown codes fail with fuzzy suggestions.
fn resolve_code(graph: &Graph, code: &str) -> Result<String> {
    if graph.contains(code) {
        return Ok(code.to_string());
    }

    let upper = code.to_ascii_uppercase();
    if graph.contains(&upper) {
        return Ok(upper);
    }

    Err(Error::UnknownAirport {
        code: code.to_string(),
        suggestions: graph.fuzzy_matches(code, MAX_SUGGESTIONS),
    })
}

/// Compute the minimum total-distance route for a request.
pub fn shortest_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_code(graph, &request.from)?;
    let goal = resolve_code(graph, &request.to)?;

    let (steps, total_km) =
        find_route_dijkstra(graph, &start, &goal).ok_or_else(|| Error::RouteNotFound {
            start: start.clone(),
            goal: goal.clone(),
        })?;

    Ok(RoutePlan {
        policy: graph.policy(),
        start,
        goal,
        steps,
        total_km,
    })
}
