//! Command protocol over a shared graph
//!
//! Each [`Request`] maps to one engine operation and yields a [`Response`]
//! carrying the outcome and the resulting state. [`SharedGraph`] holds the
//! lock for the whole request, so concurrent callers are serialized and never
//! observe a half-applied operation.

use crate::graph::{Edge, GraphError, GraphResult, GraphState, ResourceGraph, deadlock};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, warn};

/// Failures outside the engine's own pass/fail outcomes
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Graph lock poisoned by a panicked request")]
    LockPoisoned,

    #[error("Failed to encode response: {source}")]
    Encode {
        #[from]
        source: serde_json::Error,
    },
}

/// One engine operation, tagged by `op`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    AddProcess { id: String },
    AddResource { id: String },
    RequestResource { process: String, resource: String },
    AllocateResource { process: String, resource: String },
    RemoveNode { id: String },
    RemoveEdge { from: String, to: String },
    ResetGraph,
    CheckDeadlock,
    Undo,
    Redo,
    GetState,
}

/// Outcome of one request plus the state after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<Edge>>,
    pub state: GraphState,
}

impl Response {
    fn from_outcome(outcome: GraphResult<()>, state: GraphState) -> Self {
        Self {
            success: outcome.is_ok(),
            message: outcome.err().map(|e| e.to_string()),
            cycle: None,
            state,
        }
    }

    fn ok(message: Option<String>, state: GraphState) -> Self {
        Self {
            success: true,
            message,
            cycle: None,
            state,
        }
    }

    fn failure(message: String, state: GraphState) -> Self {
        Self {
            success: false,
            message: Some(message),
            cycle: None,
            state,
        }
    }

    /// Serialize as a single JSON line (no trailing newline)
    pub fn to_json_line(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Cloneable handle to one graph shared by every caller
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<Mutex<ResourceGraph>>,
}

impl SharedGraph {
    pub fn new(graph: ResourceGraph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self::new(ResourceGraph::with_history_limit(limit))
    }

    /// Run a read-only closure against the graph under the lock
    pub fn read<T>(&self, f: impl FnOnce(&ResourceGraph) -> T) -> Result<T, ProtocolError> {
        Ok(f(&*self.lock()?))
    }

    /// Execute one request
    pub fn dispatch(&self, request: Request) -> Result<Response, ProtocolError> {
        let mut graph = self.lock()?;
        debug!(?request, "Dispatching request");

        let response = match request {
            Request::AddProcess { id } => mutate(&mut graph, |g| g.add_process(&id)),
            Request::AddResource { id } => mutate(&mut graph, |g| g.add_resource(&id)),
            Request::RequestResource { process, resource } => {
                mutate(&mut graph, |g| g.request_resource(&process, &resource))
            }
            Request::AllocateResource { process, resource } => {
                mutate(&mut graph, |g| g.allocate_resource(&process, &resource))
            }
            Request::RemoveNode { id } => mutate(&mut graph, |g| g.remove_node(&id)),
            Request::RemoveEdge { from, to } => mutate(&mut graph, |g| g.remove_edge(&from, &to)),
            Request::ResetGraph => {
                graph.reset_graph();
                Response::ok(None, graph.state())
            }
            Request::CheckDeadlock => {
                let cycle = graph.check_deadlock();
                let message = match &cycle {
                    Some(edges) => format!(
                        "Deadlock detected: {}",
                        deadlock::cycle_path(edges).join(" -> ")
                    ),
                    None => "No deadlock detected".to_string(),
                };
                Response {
                    cycle,
                    ..Response::ok(Some(message), graph.state())
                }
            }
            Request::Undo => {
                let message = (!graph.undo()).then(|| "Nothing to undo".to_string());
                Response::ok(message, graph.state())
            }
            Request::Redo => {
                let message = (!graph.redo()).then(|| "Nothing to redo".to_string());
                Response::ok(message, graph.state())
            }
            Request::GetState => Response::ok(None, graph.state()),
        };

        Ok(response)
    }

    /// Parse and execute one JSON request line
    ///
    /// A malformed line is answered with a failed response and the current
    /// state rather than an error.
    pub fn handle_line(&self, line: &str) -> Result<Response, ProtocolError> {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.dispatch(request),
            Err(e) => {
                warn!(error = %e, "Rejected malformed request");
                self.reject(e)
            }
        }
    }

    /// Answer an unusable request line with a failed response and the
    /// current state
    pub fn reject(&self, reason: impl fmt::Display) -> Result<Response, ProtocolError> {
        let state = self.read(ResourceGraph::state)?;
        Ok(Response::failure(format!("Invalid request: {reason}"), state))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ResourceGraph>, ProtocolError> {
        self.inner.lock().map_err(|_| ProtocolError::LockPoisoned)
    }
}

fn mutate(
    graph: &mut ResourceGraph,
    op: impl FnOnce(&mut ResourceGraph) -> Result<(), GraphError>,
) -> Response {
    let outcome = op(graph);
    Response::from_outcome(outcome, graph.state())
}

#[cfg(test)]
mod tests {
    include!("protocol.test.rs");
}
