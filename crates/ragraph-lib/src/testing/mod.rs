//! Test support: canned graphs and order-insensitive comparison helpers
//!
//! Compiled for unit tests and behind the `test-utils` feature for the
//! end-to-end test crate.

use crate::graph::{Edge, GraphResult, NodeView, ResourceGraph};
use std::collections::BTreeSet;

/// Order-insensitive view of a graph's contents
pub type Contents = (BTreeSet<NodeView>, BTreeSet<Edge>);

/// Capture the node and edge sets of a graph
pub fn contents(graph: &ResourceGraph) -> Contents {
    let state = graph.state();
    (
        state.nodes.into_iter().collect(),
        state.edges.into_iter().collect(),
    )
}

/// Build the edge set from `(from, to)` pairs
pub fn edge_set(pairs: &[(&str, &str)]) -> BTreeSet<Edge> {
    pairs.iter().map(|(from, to)| Edge::new(from, to)).collect()
}

/// P1 requests R1, R1 is held by P2, P2 requests R2, R2 is held by P1
pub fn classic_deadlock() -> GraphResult<ResourceGraph> {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1")?;
    graph.add_process("P2")?;
    graph.add_resource("R1")?;
    graph.add_resource("R2")?;
    graph.request_resource("P1", "R1")?;
    graph.allocate_resource("P2", "R1")?;
    graph.request_resource("P2", "R2")?;
    graph.allocate_resource("P1", "R2")?;
    Ok(graph)
}

/// The four edges of [`classic_deadlock`]
pub fn classic_deadlock_edges() -> BTreeSet<Edge> {
    edge_set(&[("P1", "R1"), ("R1", "P2"), ("P2", "R2"), ("R2", "P1")])
}

/// A request chain P1 -> R1 -> P2 -> R2 with nothing closing the loop
pub fn request_chain() -> GraphResult<ResourceGraph> {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1")?;
    graph.add_process("P2")?;
    graph.add_resource("R1")?;
    graph.add_resource("R2")?;
    graph.request_resource("P1", "R1")?;
    graph.allocate_resource("P2", "R1")?;
    graph.request_resource("P2", "R2")?;
    Ok(graph)
}
