use super::*;
use serde_json::json;

#[test]
fn test_state_serializes_with_lowercase_kinds() {
    let state = GraphState {
        nodes: vec![
            NodeView::new("P1", NodeKind::Process),
            NodeView::new("R1", NodeKind::Resource),
        ],
        edges: vec![Edge::new("P1", "R1")],
        history: vec![Action::RequestEdge {
            process: "P1".to_string(),
            resource: "R1".to_string(),
        }],
    };

    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({
            "nodes": [
                {"id": "P1", "kind": "process"},
                {"id": "R1", "kind": "resource"}
            ],
            "edges": [{"from": "P1", "to": "R1"}],
            "history": [{"action": "request_edge", "process": "P1", "resource": "R1"}]
        })
    );
}

#[test]
fn test_remove_node_action_carries_snapshot() {
    let action = Action::RemoveNode {
        node: "R1".to_string(),
        kind: NodeKind::Resource,
        edges: vec![Edge::new("P1", "R1")],
    };
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(value["kind"], "resource");
    assert_eq!(value["edges"][0]["from"], "P1");
}

#[test]
fn test_edge_display() {
    assert_eq!(Edge::new("R2", "P1").to_string(), "R2 -> P1");
}
