//! Deadlock detection by directed cycle search
//!
//! Any directed cycle counts, not just alternating request/allocation
//! cycles. Single-instance resources make every such cycle a deadlock.

use super::snapshot::Edge;
use super::store::AllocationStore;
use petgraph::algo::toposort;
use petgraph::stable_graph::NodeIndex;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    OnPath,
    Done,
}

/// Check whether the graph contains any directed cycle, self-loops included
pub fn has_cycle(store: &AllocationStore) -> bool {
    toposort(store.graph(), None).is_err()
}

/// Find one directed cycle, returned as edges in traversal order
///
/// Depth-first search from each unvisited node in storage order. The cycle
/// starts at the node the closing back edge points to and ends with that
/// back edge, so `edges[i].to == edges[i + 1].from` and the last edge returns
/// to the first edge's source.
pub fn find_cycle(store: &AllocationStore) -> Option<Vec<Edge>> {
    let graph = store.graph();
    let mut visits: HashMap<NodeIndex, VisitState> = HashMap::with_capacity(graph.node_count());

    for start in graph.node_indices() {
        if visits.contains_key(&start) {
            continue;
        }

        visits.insert(start, VisitState::OnPath);
        let mut path = vec![start];
        let mut pending = vec![graph.neighbors(start)];

        while let Some(neighbors) = pending.last_mut() {
            match neighbors.next() {
                Some(next) => match visits.get(&next) {
                    None => {
                        visits.insert(next, VisitState::OnPath);
                        path.push(next);
                        pending.push(graph.neighbors(next));
                    }
                    Some(VisitState::OnPath) => return Some(close_cycle(store, &path, next)),
                    Some(VisitState::Done) => {}
                },
                None => {
                    pending.pop();
                    if let Some(finished) = path.pop() {
                        visits.insert(finished, VisitState::Done);
                    }
                }
            }
        }
    }

    None
}

fn close_cycle(store: &AllocationStore, path: &[NodeIndex], back_to: NodeIndex) -> Vec<Edge> {
    let start = path.iter().position(|&n| n == back_to).unwrap_or(0);
    let cycle = &path[start..];

    let mut edges: Vec<Edge> = cycle
        .windows(2)
        .map(|pair| store.edge_view(pair[0], pair[1]))
        .collect();
    if let Some(&last) = cycle.last() {
        edges.push(store.edge_view(last, back_to));
    }
    edges
}

/// Node ids visited by a cycle, closing back on the first one
///
/// `[a->b, b->c, c->a]` becomes `[a, b, c, a]`.
pub fn cycle_path(cycle: &[Edge]) -> Vec<&str> {
    let mut path: Vec<&str> = cycle.iter().map(|edge| edge.from.as_str()).collect();
    if let Some(first) = cycle.first() {
        path.push(first.from.as_str());
    }
    path
}

#[cfg(test)]
mod tests {
    include!("deadlock.test.rs");
}
