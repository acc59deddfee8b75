use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::network::Network;

/// Neighbour count used by the ring policy unless the caller overrides it.
pub const DEFAULT_RING_NEIGHBORS: usize = 3;

/// Minimum similarity score for an airport code to be offered as a
/// suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Edge-connectivity policies for linking representative airports.
///
/// The ring policy follows creation order, not geographic adjacency: the
/// cyclic wrap can link airports on opposite ends of the country while
/// skipping closer ones. Callers can read back the policy that produced a
/// given graph via [`Graph::policy`], since the two policies answer route
/// queries differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityPolicy {
    /// Link every pair of distinct airports.
    FullMesh,
    /// Link each airport to its next `neighbors` airports in cyclic creation
    /// order, wrapping around. Edges are undirected, so reciprocal wrap links
    /// also count toward a node's degree.
    Ring { neighbors: usize },
}

impl ConnectivityPolicy {
    /// Ring policy with the default neighbour count.
    pub fn ring() -> Self {
        Self::Ring {
            neighbors: DEFAULT_RING_NEIGHBORS,
        }
    }
}

impl fmt::Display for ConnectivityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityPolicy::FullMesh => f.write_str("full-mesh"),
            ConnectivityPolicy::Ring { neighbors } => write!(f, "ring({neighbors})"),
        }
    }
}

/// Edge within the flight-network graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: String,
    /// Geodesic distance to the target, rounded to two decimals.
    pub weight_km: f64,
}

/// Weighted undirected graph over the representative airports.
///
/// Built once and never mutated afterwards; the adjacency map is shared
/// behind an `Arc`, so clones are cheap and concurrent queries are safe.
#[derive(Debug, Clone)]
pub struct Graph {
    policy: ConnectivityPolicy,
    order: Vec<String>,
    adjacency: Arc<HashMap<String, Vec<Edge>>>,
}

impl Graph {
    /// Assemble a graph from pre-built parts.
    pub fn from_parts(
        policy: ConnectivityPolicy,
        order: Vec<String>,
        adjacency: HashMap<String, Vec<Edge>>,
    ) -> Self {
        Self {
            policy,
            order,
            adjacency: Arc::new(adjacency),
        }
    }

    /// Policy that produced this graph.
    pub fn policy(&self) -> ConnectivityPolicy {
        self.policy
    }

    /// Node codes in creation order.
    pub fn nodes(&self) -> &[String] {
        &self.order
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph contains the given node code.
    pub fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(code)
    }

    /// Return the neighbours for a given node code.
    pub fn neighbours(&self, code: &str) -> &[Edge] {
        self.adjacency
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Unique undirected edges as `(from, to, weight_km)` triples, each pair
    /// listed once with its endpoints in lexicographic order.
    pub fn edges(&self) -> Vec<(&str, &str, f64)> {
        let mut links = Vec::new();
        for code in &self.order {
            for edge in self.neighbours(code) {
                if code.as_str() < edge.target.as_str() {
                    links.push((code.as_str(), edge.target.as_str(), edge.weight_km));
                }
            }
        }
        links
    }

    /// Airport codes similar to `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_ascii_uppercase();
        let mut scored: Vec<(f64, &String)> = self
            .order
            .iter()
            .map(|code| {
                (
                    strsim::jaro_winkler(&needle, &code.to_ascii_uppercase()),
                    code,
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            compare_weight(b.0, a.0).then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.clone())
            .collect()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            policy: ConnectivityPolicy::FullMesh,
            order: Vec::new(),
            adjacency: Arc::new(HashMap::new()),
        }
    }
}

/// Build the flight-network graph over a representative set.
///
/// Every node is present in the adjacency map even when the policy leaves it
/// isolated. Each undirected link is materialized in both directions with the
/// same weight, and per-node neighbour lists are sorted by weight so frontier
/// iteration is deterministic.
pub fn build_network(network: &Network, policy: ConnectivityPolicy) -> Graph {
    let order = network.order.clone();
    let node_count = order.len();

    let mut adjacency: HashMap<String, Vec<Edge>> = HashMap::new();
    for code in &order {
        adjacency.entry(code.clone()).or_default();
    }

    for (i, j) in linked_pairs(node_count, policy) {
        let (Some(origin), Some(target)) =
            (network.airport(&order[i]), network.airport(&order[j]))
        else {
            continue;
        };

        let weight_km = round_km(origin.position.distance_km_to(&target.position));
        adjacency.entry(order[i].clone()).or_default().push(Edge {
            target: order[j].clone(),
            weight_km,
        });
        adjacency.entry(order[j].clone()).or_default().push(Edge {
            target: order[i].clone(),
            weight_km,
        });
    }

    for neighbours in adjacency.values_mut() {
        neighbours.sort_by(|a, b| {
            compare_weight(a.weight_km, b.weight_km).then_with(|| a.target.cmp(&b.target))
        });
    }

    let links = adjacency.values().map(Vec::len).sum::<usize>() / 2;
    debug!(policy = %policy, nodes = node_count, links, "built flight network");

    Graph {
        policy,
        order,
        adjacency: Arc::new(adjacency),
    }
}

/// Index pairs to link under the given policy, deduplicated and ordered.
fn linked_pairs(node_count: usize, policy: ConnectivityPolicy) -> BTreeSet<(usize, usize)> {
    let mut pairs = BTreeSet::new();
    match policy {
        ConnectivityPolicy::FullMesh => {
            for i in 0..node_count {
                for j in (i + 1)..node_count {
                    pairs.insert((i, j));
                }
            }
        }
        ConnectivityPolicy::Ring { neighbors } => {
            let reach = neighbors.min(node_count.saturating_sub(1));
            for i in 0..node_count {
                for offset in 1..=reach {
                    let j = (i + offset) % node_count;
                    if i != j {
                        pairs.insert((i.min(j), i.max(j)));
                    }
                }
            }
        }
    }
    pairs
}

fn round_km(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn compare_weight(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}
