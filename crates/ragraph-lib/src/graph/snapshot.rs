//! Serializable views of the graph

use super::action::Action;
use super::store::NodeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of history entries included in a [`GraphState`]
pub const RECENT_HISTORY_LEN: usize = 5;

/// A node id together with its kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeView {
    pub id: String,
    pub kind: NodeKind,
}

impl NodeView {
    pub fn new(id: &str, kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
        }
    }
}

/// A directed edge between two node ids
///
/// `process -> resource` is a request, `resource -> process` an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Point-in-time view of the graph for display and debugging
///
/// `history` holds at most [`RECENT_HISTORY_LEN`] entries, most recent last.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphState {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<Edge>,
    pub history: Vec<Action>,
}

impl GraphState {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    include!("snapshot.test.rs");
}
