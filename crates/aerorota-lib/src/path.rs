use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::Graph;

/// Run Dijkstra's algorithm to find the minimum total-distance path between
/// two airport codes, returning the path and its total weight in kilometers.
///
/// Frontier ties are broken toward the lexicographically smaller airport
/// code, so equal-cost routes resolve deterministically: the first path
/// discovered under that ordering wins. Returns `None` when either endpoint
/// is absent from the graph or the goal is unreachable.
pub fn find_route_dijkstra(graph: &Graph, start: &str, goal: &str) -> Option<(Vec<String>, f64)> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }
    if start == goal {
        return Some((vec![start.to_string()], 0.0));
    }

    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start.to_string(), 0.0);
    parents.insert(start.to_string(), None);
    queue.push(QueueEntry::new(start.to_string(), 0.0));

    while let Some(entry) = queue.pop() {
        let settled = match distances.get(&entry.code) {
            // Stale frontier entry superseded by a cheaper relaxation.
            Some(distance) if *distance < entry.cost.0 => continue,
            Some(distance) => *distance,
            None => continue,
        };

        if entry.code == goal {
            return Some((reconstruct_path(&parents, start, goal), settled));
        }

        for edge in graph.neighbours(&entry.code) {
            let next_cost = settled + edge.weight_km;
            if next_cost < *distances.get(&edge.target).unwrap_or(&f64::INFINITY) {
                distances.insert(edge.target.clone(), next_cost);
                parents.insert(edge.target.clone(), Some(entry.code.clone()));
                queue.push(QueueEntry::new(edge.target.clone(), next_cost));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<String, Option<String>>,
    start: &str,
    goal: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal.to_string());
    while let Some(code) = current {
        path.push(code.clone());
        if code == start {
            break;
        }
        current = parents.get(&code).cloned().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    code: String,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(code: String, cost: f64) -> Self {
        Self {
            code,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.code.cmp(&self.code))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
