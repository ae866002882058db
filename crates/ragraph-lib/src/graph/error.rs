//! Error types for graph mutations

use thiserror::Error;

/// Result type for graph mutations
pub type GraphResult<T> = Result<T, GraphError>;

/// Reasons a graph mutation was rejected
///
/// A rejected mutation leaves the graph and its history untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node id must be a non-empty string")]
    EmptyId,

    #[error("Node already exists: {id}")]
    DuplicateNode { id: String },

    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    #[error("Edge already exists: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },
}

impl GraphError {
    pub(crate) fn node_not_found(id: &str) -> Self {
        Self::NodeNotFound { id: id.to_string() }
    }

    pub(crate) fn duplicate_edge(from: &str, to: &str) -> Self {
        Self::DuplicateEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub(crate) fn edge_not_found(from: &str, to: &str) -> Self {
        Self::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
