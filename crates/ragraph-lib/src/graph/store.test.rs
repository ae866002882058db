use super::*;

#[test]
fn test_insert_node_rejects_duplicates() {
    let mut store = AllocationStore::new();
    assert!(store.insert_node("P1", NodeKind::Process));
    assert!(!store.insert_node("P1", NodeKind::Resource));
    assert_eq!(store.kind("P1"), Some(NodeKind::Process));
    assert_eq!(store.node_count(), 1);
}

#[test]
fn test_insert_edge_requires_endpoints() {
    let mut store = AllocationStore::new();
    store.insert_node("P1", NodeKind::Process);
    assert!(!store.insert_edge("P1", "R1"));
    assert!(!store.has_edge("P1", "R1"));
}

#[test]
fn test_remove_node_reports_incident_edges() {
    let mut store = AllocationStore::new();
    store.insert_node("P1", NodeKind::Process);
    store.insert_node("R1", NodeKind::Resource);
    store.insert_node("R2", NodeKind::Resource);
    store.insert_edge("P1", "R1");
    store.insert_edge("R2", "P1");
    store.insert_edge("R1", "R2");

    let (kind, mut edges) = store.remove_node("P1").unwrap();
    edges.sort();
    assert_eq!(kind, NodeKind::Process);
    assert_eq!(edges, vec![Edge::new("P1", "R1"), Edge::new("R2", "P1")]);
    assert_eq!(store.edges(), vec![Edge::new("R1", "R2")]);
}

#[test]
fn test_remove_node_keeps_other_lookups_valid() {
    let mut store = AllocationStore::new();
    for id in ["A", "B", "C"] {
        store.insert_node(id, NodeKind::Process);
    }
    store.insert_edge("B", "C");
    store.remove_node("A");

    assert_eq!(store.kind("C"), Some(NodeKind::Process));
    assert!(store.has_edge("B", "C"));
    assert!(store.remove_edge("B", "C"));
}

#[test]
fn test_self_loop_listed_once() {
    let mut store = AllocationStore::new();
    store.insert_node("P1", NodeKind::Process);
    store.insert_edge("P1", "P1");

    let (_, edges) = store.remove_node("P1").unwrap();
    assert_eq!(edges, vec![Edge::new("P1", "P1")]);
}

#[test]
fn test_clear_empties_everything() {
    let mut store = AllocationStore::new();
    store.insert_node("P1", NodeKind::Process);
    store.insert_node("R1", NodeKind::Resource);
    store.insert_edge("P1", "R1");
    store.clear();

    assert_eq!(store.node_count(), 0);
    assert_eq!(store.edge_count(), 0);
    assert!(!store.contains("P1"));
    assert!(store.insert_node("P1", NodeKind::Resource));
}
