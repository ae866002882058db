use super::*;
use serde_json::json;

fn add_process(id: &str) -> Request {
    Request::AddProcess { id: id.to_string() }
}

#[test]
fn test_request_wire_format() {
    let request: Request =
        serde_json::from_value(json!({"op": "allocate_resource", "process": "P1", "resource": "R1"}))
            .unwrap();
    assert_eq!(
        request,
        Request::AllocateResource {
            process: "P1".to_string(),
            resource: "R1".to_string()
        }
    );

    let request: Request = serde_json::from_str(r#"{"op":"undo"}"#).unwrap();
    assert_eq!(request, Request::Undo);
}

#[test]
fn test_mutator_response_carries_outcome_and_state() {
    let shared = SharedGraph::default();
    let first = shared.dispatch(add_process("P1")).unwrap();
    assert!(first.success);
    assert!(first.message.is_none());
    assert_eq!(first.state.nodes.len(), 1);

    let second = shared.dispatch(add_process("P1")).unwrap();
    assert!(!second.success);
    assert_eq!(second.message.as_deref(), Some("Node already exists: P1"));
    assert_eq!(second.state, first.state);
}

#[test]
fn test_check_deadlock_response() {
    let shared = SharedGraph::new(crate::testing::classic_deadlock().unwrap());
    let response = shared.dispatch(Request::CheckDeadlock).unwrap();
    assert!(response.success);
    assert_eq!(response.cycle.as_ref().map(Vec::len), Some(4));
    assert!(response.message.unwrap().starts_with("Deadlock detected: "));

    shared.dispatch(Request::ResetGraph).unwrap();
    let response = shared.dispatch(Request::CheckDeadlock).unwrap();
    assert!(response.cycle.is_none());
    assert_eq!(response.message.as_deref(), Some("No deadlock detected"));
}

#[test]
fn test_undo_on_empty_history_still_succeeds() {
    let shared = SharedGraph::default();
    let response = shared.dispatch(Request::Undo).unwrap();
    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("Nothing to undo"));
}

#[test]
fn test_malformed_line_reports_failure_with_state() {
    let shared = SharedGraph::default();
    shared.dispatch(add_process("P1")).unwrap();

    let response = shared.handle_line(r#"{"op":"teleport"}"#).unwrap();
    assert!(!response.success);
    assert!(response.message.unwrap().starts_with("Invalid request:"));
    assert_eq!(response.state.nodes.len(), 1);
}

#[test]
fn test_reject_keeps_state_and_history() {
    let shared = SharedGraph::default();
    shared.dispatch(add_process("P1")).unwrap();
    let before = shared.read(ResourceGraph::state).unwrap();

    let response = shared.reject("line is not UTF-8").unwrap();
    assert!(!response.success);
    assert_eq!(
        response.message.as_deref(),
        Some("Invalid request: line is not UTF-8")
    );
    assert_eq!(response.state, before);
}

#[test]
fn test_response_json_omits_absent_fields() {
    let shared = SharedGraph::default();
    let line = shared
        .dispatch(Request::GetState)
        .unwrap()
        .to_json_line()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(
        value,
        json!({"success": true, "state": {"nodes": [], "edges": [], "history": []}})
    );
}

#[test]
fn test_concurrent_requests_are_serialized() {
    let shared = SharedGraph::with_history_limit(0);
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for i in 0..50 {
                    let id = format!("P{t}-{i}");
                    let response = shared.dispatch(Request::AddProcess { id: id.clone() }).unwrap();
                    assert!(response.success);
                    shared
                        .dispatch(Request::RemoveNode { id })
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let (nodes, history) = shared
        .read(|g| (g.node_count(), g.history().len()))
        .unwrap();
    assert_eq!(nodes, 0);
    assert_eq!(history, 8 * 50 * 2);
}
