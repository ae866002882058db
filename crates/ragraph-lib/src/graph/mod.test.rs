// Tests for the graph engine: validation, history, undo/redo

use super::*;
use crate::testing::{classic_deadlock, classic_deadlock_edges, contents, edge_set};

// ============================================================================
// Node Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = ResourceGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.can_undo());
    assert!(graph.state().is_empty());
}

#[test]
fn test_add_process_twice_succeeds_then_fails() {
    let mut graph = ResourceGraph::new();
    assert!(graph.add_process("P1").is_ok());
    assert_eq!(
        graph.add_process("P1"),
        Err(GraphError::DuplicateNode {
            id: "P1".to_string()
        })
    );
    assert_eq!(graph.history().len(), 1);
}

#[test]
fn test_processes_and_resources_share_namespace() {
    let mut graph = ResourceGraph::new();
    graph.add_resource("X").unwrap();
    assert!(graph.add_process("X").is_err());
    assert_eq!(graph.node_kind("X"), Some(NodeKind::Resource));
}

#[test]
fn test_empty_id_rejected() {
    let mut graph = ResourceGraph::new();
    assert_eq!(graph.add_process(""), Err(GraphError::EmptyId));
    assert_eq!(graph.add_resource(""), Err(GraphError::EmptyId));
    assert_eq!(graph.node_count(), 0);
    assert!(!graph.can_undo());
}

#[test]
fn test_remove_unknown_node_fails() {
    let mut graph = ResourceGraph::new();
    assert_eq!(
        graph.remove_node("ghost"),
        Err(GraphError::NodeNotFound {
            id: "ghost".to_string()
        })
    );
}

#[test]
fn test_remove_node_drops_incident_edges_both_directions() {
    let mut graph = classic_deadlock().unwrap();
    graph.remove_node("P1").unwrap();

    let (nodes, edges) = contents(&graph);
    assert_eq!(nodes.len(), 3);
    assert_eq!(edges, edge_set(&[("R1", "P2"), ("P2", "R2")]));
    assert!(graph.check_deadlock().is_none());
}

#[test]
fn test_remove_node_breaks_cycle_and_never_reported_again() {
    let mut graph = classic_deadlock().unwrap();
    graph.add_process("P3").unwrap();
    graph.add_resource("R3").unwrap();
    graph.request_resource("P3", "R3").unwrap();
    graph.allocate_resource("P3", "R3").unwrap();

    graph.remove_node("R1").unwrap();
    let cycle = graph.check_deadlock().expect("P3/R3 still deadlocked");
    assert!(cycle.iter().all(|e| e.from != "R1" && e.to != "R1"));
}

// ============================================================================
// Edge Operations
// ============================================================================

#[test]
fn test_request_requires_known_endpoints() {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1").unwrap();
    assert_eq!(
        graph.request_resource("P1", "R1"),
        Err(GraphError::NodeNotFound {
            id: "R1".to_string()
        })
    );
    assert_eq!(
        graph.allocate_resource("P9", "P1"),
        Err(GraphError::NodeNotFound {
            id: "P9".to_string()
        })
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_each_direction_succeeds_exactly_once() {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1").unwrap();
    graph.add_resource("R1").unwrap();

    assert!(graph.request_resource("P1", "R1").is_ok());
    assert_eq!(
        graph.request_resource("P1", "R1"),
        Err(GraphError::DuplicateEdge {
            from: "P1".to_string(),
            to: "R1".to_string()
        })
    );

    assert!(graph.allocate_resource("P1", "R1").is_ok());
    assert!(graph.allocate_resource("P1", "R1").is_err());

    assert!(graph.has_edge("P1", "R1"));
    assert!(graph.has_edge("R1", "P1"));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_edges_ignore_node_kind() {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1").unwrap();
    graph.add_process("P2").unwrap();
    assert!(graph.request_resource("P1", "P2").is_ok());
    assert!(graph.allocate_resource("P1", "P2").is_ok());
    assert!(graph.has_edge("P2", "P1"));
}

#[test]
fn test_remove_edge_is_direction_sensitive() {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1").unwrap();
    graph.add_resource("R1").unwrap();
    graph.request_resource("P1", "R1").unwrap();

    assert_eq!(
        graph.remove_edge("R1", "P1"),
        Err(GraphError::EdgeNotFound {
            from: "R1".to_string(),
            to: "P1".to_string()
        })
    );
    assert!(graph.remove_edge("P1", "R1").is_ok());
    assert_eq!(graph.edge_count(), 0);
}

// ============================================================================
// Undo / Redo
// ============================================================================

#[test]
fn test_undo_and_redo_on_empty_stacks_are_noops() {
    let mut graph = ResourceGraph::new();
    assert!(!graph.undo());
    assert!(!graph.redo());
    assert!(graph.state().is_empty());
}

#[test]
fn test_undo_restores_every_prior_state() {
    let mut graph = ResourceGraph::new();
    let mut snapshots = vec![contents(&graph)];

    graph.add_process("P1").unwrap();
    snapshots.push(contents(&graph));
    graph.add_resource("R1").unwrap();
    snapshots.push(contents(&graph));
    graph.request_resource("P1", "R1").unwrap();
    snapshots.push(contents(&graph));
    graph.allocate_resource("P1", "R1").unwrap();
    snapshots.push(contents(&graph));
    graph.remove_edge("P1", "R1").unwrap();
    snapshots.push(contents(&graph));
    graph.remove_node("R1").unwrap();
    snapshots.push(contents(&graph));

    // The last snapshot is the current state
    snapshots.pop();
    while let Some(expected) = snapshots.pop() {
        assert!(graph.undo());
        assert_eq!(contents(&graph), expected);
    }
    assert!(!graph.undo());
}

#[test]
fn test_undo_remove_node_restores_kind_and_edges() {
    let mut graph = classic_deadlock().unwrap();
    let before = contents(&graph);

    graph.remove_node("R2").unwrap();
    assert!(!graph.contains("R2"));

    graph.undo();
    assert_eq!(contents(&graph), before);
    assert_eq!(graph.node_kind("R2"), Some(NodeKind::Resource));
    assert!(graph.check_deadlock().is_some());
}

#[test]
fn test_undo_remove_node_with_self_loop() {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1").unwrap();
    graph.request_resource("P1", "P1").unwrap();
    let before = contents(&graph);

    graph.remove_node("P1").unwrap();
    assert_eq!(graph.edge_count(), 0);
    graph.undo();
    assert_eq!(contents(&graph), before);
}

#[test]
fn test_redo_after_undo_round_trips() {
    let mut graph = classic_deadlock().unwrap();
    graph.remove_node("P2").unwrap();
    let after_remove = contents(&graph);

    graph.undo();
    graph.redo();
    assert_eq!(contents(&graph), after_remove);

    // Each kind of action survives the round trip
    for _ in 0..9 {
        let at = contents(&graph);
        if !graph.undo() {
            break;
        }
        graph.redo();
        assert_eq!(contents(&graph), at);
        graph.undo();
    }
}

#[test]
fn test_new_mutation_discards_redo_branch() {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1").unwrap();
    graph.add_process("P2").unwrap();
    graph.undo();
    graph.undo();
    assert!(graph.can_redo());

    graph.add_resource("R1").unwrap();
    assert!(!graph.can_redo());
    assert!(!graph.redo());
    assert!(!graph.contains("P1"));
}

#[test]
fn test_rejected_mutation_keeps_redo_branch() {
    let mut graph = ResourceGraph::new();
    graph.add_process("P1").unwrap();
    graph.add_process("P2").unwrap();
    graph.undo();

    assert!(graph.add_process("P1").is_err());
    assert_eq!(graph.history_len(), 1);
    assert!(graph.redo());
    assert_eq!(graph.history_len(), 2);
    assert!(graph.contains("P2"));
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_leaves_single_history_entry() {
    let mut graph = classic_deadlock().unwrap();
    let before = contents(&graph);

    graph.reset_graph();
    let state = graph.state();
    assert!(state.is_empty());
    assert_eq!(state.history.len(), 1);
    assert!(matches!(state.history[0], Action::ResetGraph { .. }));
    assert_eq!(graph.history().len(), 1);

    assert!(graph.undo());
    assert_eq!(contents(&graph), before);
    assert_eq!(graph.check_deadlock().map(|c| c.len()), Some(4));
    assert!(!graph.undo());
}

#[test]
fn test_reset_empty_graph_still_succeeds() {
    let mut graph = ResourceGraph::new();
    graph.reset_graph();
    assert_eq!(graph.history().len(), 1);
}

#[test]
fn test_redo_reset_clears_again() {
    let mut graph = classic_deadlock().unwrap();
    graph.reset_graph();
    graph.undo();
    assert_eq!(graph.node_count(), 4);

    assert!(graph.redo());
    assert!(graph.state().is_empty());
    assert_eq!(graph.history().len(), 1);
}

// ============================================================================
// Deadlock and State
// ============================================================================

#[test]
fn test_check_deadlock_reports_classic_cycle() {
    let graph = classic_deadlock().unwrap();
    let cycle = graph.check_deadlock().expect("cycle expected");
    assert_eq!(cycle.len(), 4);
    assert_eq!(
        cycle.into_iter().collect::<std::collections::BTreeSet<_>>(),
        classic_deadlock_edges()
    );
    assert!(graph.has_deadlock());
}

#[test]
fn test_check_deadlock_has_no_side_effects() {
    let graph = classic_deadlock().unwrap();
    let before = graph.state();
    graph.check_deadlock();
    assert_eq!(graph.state(), before);
}

#[test]
fn test_state_history_capped_at_five() {
    let mut graph = ResourceGraph::new();
    for i in 0..12 {
        graph.add_process(&format!("P{i}")).unwrap();
    }

    let state = graph.state();
    assert_eq!(state.history.len(), RECENT_HISTORY_LEN);
    assert_eq!(
        state.history.last(),
        Some(&Action::AddProcess {
            process: "P11".to_string()
        })
    );
    assert_eq!(graph.history().len(), 12);
}

#[test]
fn test_history_limit_evicts_oldest() {
    let mut graph = ResourceGraph::with_history_limit(3);
    for id in ["A", "B", "C", "D"] {
        graph.add_process(id).unwrap();
    }
    assert_eq!(graph.history().len(), 3);

    assert_eq!(graph.history_len(), 3);

    while graph.undo() {}
    assert_eq!(graph.history_len(), 0);
    // "A" was evicted from history, so it can no longer be undone
    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains("A"));
}
