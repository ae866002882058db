use super::*;

fn add(id: &str) -> Action {
    Action::AddProcess {
        process: id.to_string(),
    }
}

#[test]
fn test_record_clears_redo() {
    let mut history = History::new(0);
    history.record(add("A"));
    history.record(add("B"));
    history.step_back();
    assert_eq!(history.redo_len(), 1);

    history.record(add("C"));
    assert_eq!(history.redo_len(), 0);
    assert_eq!(history.recent(10), vec![add("A"), add("C")]);
}

#[test]
fn test_step_back_and_forward_move_between_stacks() {
    let mut history = History::new(0);
    history.record(add("A"));

    assert_eq!(history.step_back(), Some(&add("A")));
    assert!(history.is_empty());
    assert_eq!(history.step_back(), None);

    assert_eq!(history.step_forward(), Some(&add("A")));
    assert_eq!(history.len(), 1);
    assert_eq!(history.step_forward(), None);
}

#[test]
fn test_limit_evicts_oldest_entries() {
    let mut history = History::new(2);
    for id in ["A", "B", "C"] {
        history.record(add(id));
    }
    assert_eq!(history.recent(5), vec![add("B"), add("C")]);
}

#[test]
fn test_zero_limit_is_unbounded() {
    let mut history = History::new(0);
    for i in 0..(DEFAULT_HISTORY_LIMIT + 10) {
        history.record(add(&i.to_string()));
    }
    assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT + 10);
}

#[test]
fn test_restart_with_replaces_everything() {
    let mut history = History::default();
    history.record(add("A"));
    history.record(add("B"));
    history.step_back();

    let reset = Action::ResetGraph {
        nodes: vec![],
        edges: vec![],
    };
    history.restart_with(reset.clone());
    assert_eq!(history.len(), 1);
    assert_eq!(history.redo_len(), 0);
    assert_eq!(history.recent(5), vec![reset]);
}

#[test]
fn test_revert_allocate_removes_reverse_edge() {
    let mut store = AllocationStore::new();
    store.insert_node("P1", NodeKind::Process);
    store.insert_node("R1", NodeKind::Resource);
    store.insert_edge("P1", "R1");
    store.insert_edge("R1", "P1");

    let action = Action::AllocateEdge {
        process: "P1".to_string(),
        resource: "R1".to_string(),
    };
    action.revert(&mut store);
    assert!(!store.has_edge("R1", "P1"));
    assert!(store.has_edge("P1", "R1"));

    action.apply(&mut store);
    assert!(store.has_edge("R1", "P1"));
}

#[test]
fn test_serialized_tag_matches_name() {
    let action = Action::RemoveEdge {
        from: "P1".to_string(),
        to: "R1".to_string(),
    };
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json["action"], action.name());
    assert_eq!(json["from"], "P1");
    assert_eq!(json["to"], "R1");
}
