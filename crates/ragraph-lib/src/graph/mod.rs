//! Resource allocation graph with undo/redo and deadlock detection
//!
//! Processes and resources share one id namespace. A `process -> resource`
//! edge is a pending request, a `resource -> process` edge an allocation.
//! Every successful mutation is recorded in a linear [`History`]; a rejected
//! mutation changes nothing, including the redo stack.
//!
//! Edge operations only check topology: either endpoint may be of any kind.

pub mod action;
pub mod deadlock;
pub mod error;
pub mod snapshot;
pub mod store;

pub use action::{Action, DEFAULT_HISTORY_LIMIT, History};
pub use error::{GraphError, GraphResult};
pub use snapshot::{Edge, GraphState, NodeView, RECENT_HISTORY_LEN};
pub use store::{AllocationStore, NodeKind};

use tracing::{debug, info, trace};

/// The graph engine: storage plus history
#[derive(Debug, Clone, Default)]
pub struct ResourceGraph {
    store: AllocationStore,
    history: History,
}

impl ResourceGraph {
    /// Create an empty graph with the default history limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph keeping at most `limit` undoable actions
    /// (0 keeps everything)
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            store: AllocationStore::new(),
            history: History::new(limit),
        }
    }

    pub fn add_process(&mut self, id: &str) -> GraphResult<()> {
        self.add_node(id, NodeKind::Process)?;
        self.history.record(Action::AddProcess {
            process: id.to_string(),
        });
        Ok(())
    }

    pub fn add_resource(&mut self, id: &str) -> GraphResult<()> {
        self.add_node(id, NodeKind::Resource)?;
        self.history.record(Action::AddResource {
            resource: id.to_string(),
        });
        Ok(())
    }

    /// Add the request edge `process -> resource`
    pub fn request_resource(&mut self, process: &str, resource: &str) -> GraphResult<()> {
        self.connect(process, resource)?;
        debug!(process, resource, "Recorded request");
        self.history.record(Action::RequestEdge {
            process: process.to_string(),
            resource: resource.to_string(),
        });
        Ok(())
    }

    /// Add the allocation edge `resource -> process`
    pub fn allocate_resource(&mut self, process: &str, resource: &str) -> GraphResult<()> {
        self.require_node(process)?;
        self.connect(resource, process)?;
        debug!(process, resource, "Recorded allocation");
        self.history.record(Action::AllocateEdge {
            process: process.to_string(),
            resource: resource.to_string(),
        });
        Ok(())
    }

    /// Remove a node together with every edge touching it
    pub fn remove_node(&mut self, id: &str) -> GraphResult<()> {
        let Some((kind, edges)) = self.store.remove_node(id) else {
            trace!(id, "Rejected removal of unknown node");
            return Err(GraphError::node_not_found(id));
        };

        debug!(id, %kind, incident = edges.len(), "Removed node");
        self.history.record(Action::RemoveNode {
            node: id.to_string(),
            kind,
            edges,
        });
        Ok(())
    }

    /// Remove the directed edge `from -> to`
    pub fn remove_edge(&mut self, from: &str, to: &str) -> GraphResult<()> {
        if !self.store.remove_edge(from, to) {
            trace!(from, to, "Rejected removal of unknown edge");
            return Err(GraphError::edge_not_found(from, to));
        }

        debug!(from, to, "Removed edge");
        self.history.record(Action::RemoveEdge {
            from: from.to_string(),
            to: to.to_string(),
        });
        Ok(())
    }

    /// Clear the graph; the reset becomes the only history entry
    pub fn reset_graph(&mut self) {
        let nodes = self.store.nodes();
        let edges = self.store.edges();
        info!(nodes = nodes.len(), edges = edges.len(), "Reset graph");

        self.store.clear();
        self.history.restart_with(Action::ResetGraph { nodes, edges });
    }

    /// Find one directed cycle, if any
    pub fn check_deadlock(&self) -> Option<Vec<Edge>> {
        let cycle = deadlock::find_cycle(&self.store);
        if let Some(edges) = &cycle {
            info!(
                cycle = %deadlock::cycle_path(edges).join(" -> "),
                "Deadlock detected"
            );
        }
        cycle
    }

    pub fn has_deadlock(&self) -> bool {
        deadlock::has_cycle(&self.store)
    }

    /// Revert the most recent action; returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.step_back() {
            Some(action) => {
                debug!(action = action.name(), "Undo");
                action.revert(&mut self.store);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone action; returns false when there is
    /// nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(action) => {
                debug!(action = action.name(), "Redo");
                action.apply(&mut self.store);
                true
            }
            None => false,
        }
    }

    /// Nodes, edges and the last [`RECENT_HISTORY_LEN`] actions
    pub fn state(&self) -> GraphState {
        GraphState {
            nodes: self.store.nodes(),
            edges: self.store.edges(),
            history: self.history.recent(RECENT_HISTORY_LEN),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    pub fn node_kind(&self, id: &str) -> Option<NodeKind> {
        self.store.kind(id)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.store.has_edge(from, to)
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.history.redo_len() > 0
    }

    /// Number of actions that can currently be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn add_node(&mut self, id: &str, kind: NodeKind) -> GraphResult<()> {
        if id.is_empty() {
            trace!(%kind, "Rejected empty node id");
            return Err(GraphError::EmptyId);
        }
        if !self.store.insert_node(id, kind) {
            trace!(id, %kind, "Rejected duplicate node");
            return Err(GraphError::DuplicateNode { id: id.to_string() });
        }

        debug!(id, %kind, "Added node");
        Ok(())
    }

    fn require_node(&self, id: &str) -> GraphResult<()> {
        if self.store.contains(id) {
            Ok(())
        } else {
            trace!(id, "Rejected edge to unknown node");
            Err(GraphError::node_not_found(id))
        }
    }

    fn connect(&mut self, from: &str, to: &str) -> GraphResult<()> {
        self.require_node(from)?;
        self.require_node(to)?;
        if !self.store.insert_edge(from, to) {
            trace!(from, to, "Rejected duplicate edge");
            return Err(GraphError::duplicate_edge(from, to));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
