use super::*;
use crate::graph::store::NodeKind;
use crate::testing::{classic_deadlock_edges, edge_set};
use std::collections::BTreeSet;

fn store_with(nodes: &[(&str, NodeKind)], edges: &[(&str, &str)]) -> AllocationStore {
    let mut store = AllocationStore::new();
    for (id, kind) in nodes {
        store.insert_node(id, *kind);
    }
    for (from, to) in edges {
        store.insert_edge(from, to);
    }
    store
}

fn assert_chained(cycle: &[Edge]) {
    for pair in cycle.windows(2) {
        assert_eq!(pair[0].to, pair[1].from, "cycle not in traversal order: {cycle:?}");
    }
    let (first, last) = (cycle.first().unwrap(), cycle.last().unwrap());
    assert_eq!(last.to, first.from);
}

const P: NodeKind = NodeKind::Process;
const R: NodeKind = NodeKind::Resource;

#[test]
fn test_classic_cycle_found_in_order() {
    let store = store_with(
        &[("P1", P), ("P2", P), ("R1", R), ("R2", R)],
        &[("P1", "R1"), ("R1", "P2"), ("P2", "R2"), ("R2", "P1")],
    );

    let cycle = find_cycle(&store).unwrap();
    assert_chained(&cycle);
    assert_eq!(cycle.iter().cloned().collect::<BTreeSet<_>>(), classic_deadlock_edges());
    assert!(has_cycle(&store));
}

#[test]
fn test_request_chain_has_no_cycle() {
    let store = store_with(
        &[("P1", P), ("P2", P), ("R1", R), ("R2", R)],
        &[("P1", "R1"), ("R1", "P2"), ("P2", "R2")],
    );
    assert!(find_cycle(&store).is_none());
    assert!(!has_cycle(&store));
}

#[test]
fn test_empty_graph_has_no_cycle() {
    assert!(find_cycle(&AllocationStore::new()).is_none());
}

#[test]
fn test_self_loop_is_one_edge_cycle() {
    let store = store_with(&[("P1", P)], &[("P1", "P1")]);
    assert_eq!(find_cycle(&store), Some(vec![Edge::new("P1", "P1")]));
}

#[test]
fn test_non_bipartite_cycle_reported() {
    let store = store_with(
        &[("P1", P), ("P2", P), ("P3", P)],
        &[("P1", "P2"), ("P2", "P3"), ("P3", "P1")],
    );
    let cycle = find_cycle(&store).unwrap();
    assert_chained(&cycle);
    assert_eq!(cycle.len(), 3);
}

#[test]
fn test_cycle_reported_without_tail() {
    // A tail leading into the cycle must not appear in the result
    let store = store_with(
        &[("T", P), ("P1", P), ("R1", R)],
        &[("T", "P1"), ("P1", "R1"), ("R1", "P1")],
    );
    let cycle = find_cycle(&store).unwrap();
    assert_chained(&cycle);
    assert_eq!(
        cycle.into_iter().collect::<BTreeSet<_>>(),
        edge_set(&[("P1", "R1"), ("R1", "P1")])
    );
}

#[test]
fn test_diamond_without_cycle() {
    let store = store_with(
        &[("A", P), ("B", R), ("C", R), ("D", P)],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    assert!(find_cycle(&store).is_none());
}

#[test]
fn test_long_chain_does_not_overflow() {
    let mut store = AllocationStore::new();
    let ids: Vec<String> = (0..50_000).map(|i| format!("N{i}")).collect();
    for id in &ids {
        store.insert_node(id, P);
    }
    for pair in ids.windows(2) {
        store.insert_edge(&pair[0], &pair[1]);
    }
    assert!(find_cycle(&store).is_none());

    store.insert_edge(&ids[ids.len() - 1], &ids[0]);
    assert_eq!(find_cycle(&store).map(|c| c.len()), Some(ids.len()));
}

#[test]
fn test_cycle_path_closes_loop() {
    let cycle = vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a")];
    assert_eq!(cycle_path(&cycle), vec!["a", "b", "c", "a"]);
    assert!(cycle_path(&[]).is_empty());
}

#[test]
fn test_has_cycle_counts_self_loops() {
    let store = store_with(&[("R1", R)], &[("R1", "R1")]);
    assert!(has_cycle(&store));
}
