use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{ConnectivityPolicy, Graph};
use crate::network::Network;
use crate::routing::RoutePlan;

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Distance flown from the previous step; absent on the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_km: Option<f64>,
}

impl RouteLeg {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that rendering consumers can
/// serialise or caption.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub policy: ConnectivityPolicy,
    pub hops: usize,
    pub total_km: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved
    /// airport names and per-leg distances.
    pub fn from_plan(network: &Network, graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let legs = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, code)| RouteLeg {
                index,
                code: code.clone(),
                name: network.airport(code).map(|airport| airport.name.clone()),
                leg_km: if index == 0 {
                    None
                } else {
                    leg_distance(graph, &plan.steps[index - 1], code)
                },
            })
            .collect::<Vec<_>>();

        let start = RouteEndpoint {
            code: plan.start.clone(),
            name: legs.first().and_then(|leg| leg.name.clone()),
        };
        let goal = RouteEndpoint {
            code: plan.goal.clone(),
            name: legs.last().and_then(|leg| leg.name.clone()),
        };

        Ok(Self {
            policy: plan.policy,
            hops: plan.hop_count(),
            total_km: plan.total_km,
            start,
            goal,
            legs,
        })
    }

    /// Render the summary as the plain text used by the CLI.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.2} km, policy: {})",
            self.start.code, self.goal.code, self.hops, self.total_km, self.policy
        );

        for leg in &self.legs {
            match leg.leg_km {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "  {}. {} ({}) +{:.2} km",
                        leg.index,
                        leg.code,
                        leg.display_name(),
                        distance
                    );
                }
                None => {
                    let _ = writeln!(buffer, "  {}. {} ({})", leg.index, leg.code, leg.display_name());
                }
            }
        }

        buffer
    }
}

/// Airport entry within a network summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetworkAirport {
    pub code: String,
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Undirected link within a network summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetworkLink {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

/// Structured view of the built network for rendering consumers: airports
/// with their positions, plus each undirected link listed once.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetworkSummary {
    pub policy: ConnectivityPolicy,
    pub airports: Vec<NetworkAirport>,
    pub links: Vec<NetworkLink>,
}

impl NetworkSummary {
    pub fn from_graph(network: &Network, graph: &Graph) -> Self {
        let airports = graph
            .nodes()
            .iter()
            .filter_map(|code| network.airport(code))
            .map(|airport| NetworkAirport {
                code: airport.code.clone(),
                name: airport.name.clone(),
                region: airport.region.clone(),
                latitude: airport.position.latitude,
                longitude: airport.position.longitude,
            })
            .collect();

        let links = graph
            .edges()
            .into_iter()
            .map(|(from, to, distance_km)| NetworkLink {
                from: from.to_string(),
                to: to.to_string(),
                distance_km,
            })
            .collect();

        Self {
            policy: graph.policy(),
            airports,
            links,
        }
    }

    /// Render the summary as a plain-text listing.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Network: {} airports, {} links (policy: {})",
            self.airports.len(),
            self.links.len(),
            self.policy
        );

        for airport in &self.airports {
            let _ = writeln!(
                buffer,
                "  {}  {} [{}]  ({:.4}, {:.4})",
                airport.code, airport.name, airport.region, airport.latitude, airport.longitude
            );
        }
        for link in &self.links {
            let _ = writeln!(
                buffer,
                "  {} <-> {}  {:.2} km",
                link.from, link.to, link.distance_km
            );
        }

        buffer
    }
}

fn leg_distance(graph: &Graph, from: &str, to: &str) -> Option<f64> {
    graph
        .neighbours(from)
        .iter()
        .find(|edge| edge.target == to)
        .map(|edge| edge.weight_km)
}
