//! Node and edge storage for the resource allocation graph
//!
//! Raw storage primitives with no history bookkeeping. Callers in
//! [`super::ResourceGraph`] validate first and record actions; undo/redo
//! replay goes straight through these methods.

use super::snapshot::{Edge, NodeView};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Whether a node models a process or a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Process,
    Resource,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Process => f.write_str("process"),
            NodeKind::Resource => f.write_str("resource"),
        }
    }
}

/// Node weight: the id is kept alongside the kind so traversals can report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeEntry {
    pub id: String,
    pub kind: NodeKind,
}

/// Directed graph keyed by string ids
///
/// Uses a stable graph so removing a node never shifts the indices held in
/// `node_map` for the remaining nodes.
#[derive(Debug, Clone, Default)]
pub struct AllocationStore {
    graph: StableDiGraph<NodeEntry, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl AllocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn kind(&self, id: &str) -> Option<NodeKind> {
        let idx = self.node_map.get(id)?;
        Some(self.graph[*idx].kind)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Insert a node; returns false if the id is already taken
    pub fn insert_node(&mut self, id: &str, kind: NodeKind) -> bool {
        if self.node_map.contains_key(id) {
            return false;
        }

        let idx = self.graph.add_node(NodeEntry {
            id: id.to_string(),
            kind,
        });
        self.node_map.insert(id.to_string(), idx);
        true
    }

    /// Remove a node and every incident edge
    ///
    /// Returns the removed node's kind and its incident edges (incoming first,
    /// then outgoing; a self-loop is listed once).
    pub fn remove_node(&mut self, id: &str) -> Option<(NodeKind, Vec<Edge>)> {
        let idx = self.node_map.remove(id)?;
        let incident = self.incident_edges(idx);
        let entry = self.graph.remove_node(idx)?;
        Some((entry.kind, incident))
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_map.get(from), self.node_map.get(to)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Insert a directed edge; returns false if an endpoint is missing or the
    /// edge already exists
    pub fn insert_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(&a), Some(&b)) = (self.node_map.get(from), self.node_map.get(to)) else {
            return false;
        };
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(&a), Some(&b)) = (self.node_map.get(from), self.node_map.get(to)) else {
            return false;
        };
        match self.graph.find_edge(a, b) {
            Some(edge) => self.graph.remove_edge(edge).is_some(),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_map.clear();
    }

    /// All nodes with their kind, in storage order
    pub fn nodes(&self) -> Vec<NodeView> {
        self.graph
            .node_indices()
            .map(|idx| NodeView::new(&self.graph[idx].id, self.graph[idx].kind))
            .collect()
    }

    /// All edges, in storage order
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(from, to)| self.edge_view(from, to))
            .collect()
    }

    pub(crate) fn graph(&self) -> &StableDiGraph<NodeEntry, ()> {
        &self.graph
    }

    pub(crate) fn edge_view(&self, from: NodeIndex, to: NodeIndex) -> Edge {
        Edge::new(&self.graph[from].id, &self.graph[to].id)
    }

    fn incident_edges(&self, idx: NodeIndex) -> Vec<Edge> {
        let incoming = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .filter(|&source| source != idx)
            .map(|source| self.edge_view(source, idx));
        let outgoing = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|target| self.edge_view(idx, target));

        incoming.chain(outgoing).collect()
    }
}

#[cfg(test)]
mod tests {
    include!("store.test.rs");
}
