//! Reversible action records and the undo/redo history
//!
//! Every successful mutation produces one [`Action`]. Each variant carries
//! exactly what its inverse needs: `RemoveNode` and `ResetGraph` snapshot the
//! structure they delete because node removal cannot be undone from the id
//! alone.

use super::snapshot::{Edge, NodeView};
use super::store::{AllocationStore, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::warn;

/// Default cap on the number of undoable actions kept
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// One reversible mutation of the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    AddProcess {
        process: String,
    },
    AddResource {
        resource: String,
    },
    /// Edge `process -> resource`
    RequestEdge {
        process: String,
        resource: String,
    },
    /// Edge `resource -> process`
    AllocateEdge {
        process: String,
        resource: String,
    },
    RemoveNode {
        node: String,
        kind: NodeKind,
        edges: Vec<Edge>,
    },
    RemoveEdge {
        from: String,
        to: String,
    },
    ResetGraph {
        nodes: Vec<NodeView>,
        edges: Vec<Edge>,
    },
}

impl Action {
    /// Short operation name, matching the serialized tag
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddProcess { .. } => "add_process",
            Action::AddResource { .. } => "add_resource",
            Action::RequestEdge { .. } => "request_edge",
            Action::AllocateEdge { .. } => "allocate_edge",
            Action::RemoveNode { .. } => "remove_node",
            Action::RemoveEdge { .. } => "remove_edge",
            Action::ResetGraph { .. } => "reset_graph",
        }
    }

    /// Re-apply the original mutation
    pub(crate) fn apply(&self, store: &mut AllocationStore) {
        let applied = match self {
            Action::AddProcess { process } => store.insert_node(process, NodeKind::Process),
            Action::AddResource { resource } => store.insert_node(resource, NodeKind::Resource),
            Action::RequestEdge { process, resource } => store.insert_edge(process, resource),
            Action::AllocateEdge { process, resource } => store.insert_edge(resource, process),
            Action::RemoveNode { node, .. } => store.remove_node(node).is_some(),
            Action::RemoveEdge { from, to } => store.remove_edge(from, to),
            Action::ResetGraph { .. } => {
                store.clear();
                true
            }
        };

        if !applied {
            warn!(action = self.name(), "Replayed action did not match graph state");
        }
    }

    /// Apply the exact inverse of this mutation
    pub(crate) fn revert(&self, store: &mut AllocationStore) {
        let reverted = match self {
            Action::AddProcess { process } => store.remove_node(process).is_some(),
            Action::AddResource { resource } => store.remove_node(resource).is_some(),
            Action::RequestEdge { process, resource } => store.remove_edge(process, resource),
            Action::AllocateEdge { process, resource } => store.remove_edge(resource, process),
            Action::RemoveNode { node, kind, edges } => {
                let inserted = store.insert_node(node, *kind);
                restore_edges(store, edges);
                inserted
            }
            Action::RemoveEdge { from, to } => store.insert_edge(from, to),
            Action::ResetGraph { nodes, edges } => {
                for node in nodes {
                    store.insert_node(&node.id, node.kind);
                }
                restore_edges(store, edges);
                true
            }
        };

        if !reverted {
            warn!(action = self.name(), "Reverted action did not match graph state");
        }
    }
}

fn restore_edges(store: &mut AllocationStore, edges: &[Edge]) {
    for edge in edges {
        store.insert_edge(&edge.from, &edge.to);
    }
}

/// Linear undo/redo history
///
/// Holds at most `limit` undoable actions (0 means unbounded); recording past
/// the limit evicts the oldest entry. The redo stack only ever holds actions
/// taken off the undo side, so it is bounded by the same limit.
#[derive(Debug, Clone)]
pub struct History {
    done: VecDeque<Action>,
    undone: Vec<Action>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            done: VecDeque::new(),
            undone: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of undoable actions
    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Number of redoable actions
    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    /// Record a new mutation, invalidating the redo branch
    pub fn record(&mut self, action: Action) {
        self.undone.clear();
        self.push_done(action);
    }

    /// Discard everything and start over with `action` as the only entry
    pub fn restart_with(&mut self, action: Action) {
        self.done.clear();
        self.undone.clear();
        self.done.push_back(action);
    }

    /// Move the newest action onto the redo stack and return it
    pub fn step_back(&mut self) -> Option<&Action> {
        let action = self.done.pop_back()?;
        self.undone.push(action);
        self.undone.last()
    }

    /// Move the newest undone action back into history and return it
    pub fn step_forward(&mut self) -> Option<&Action> {
        let action = self.undone.pop()?;
        self.push_done(action);
        self.done.back()
    }

    /// The last `n` actions, oldest first
    pub fn recent(&self, n: usize) -> Vec<Action> {
        let skip = self.done.len().saturating_sub(n);
        self.done.iter().skip(skip).cloned().collect()
    }

    fn push_done(&mut self, action: Action) {
        self.done.push_back(action);
        if self.limit > 0 {
            while self.done.len() > self.limit {
                self.done.pop_front();
            }
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    include!("action.test.rs");
}
