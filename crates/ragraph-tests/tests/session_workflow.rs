//! E2E tests for JSON request sessions
//!
//! Drive whole scripts through the protocol layer and check each response
//! the way an outer client would see them.

use anyhow::Result;
use ragraph_lib::application::commands::run_session;
use ragraph_lib::application::{Request, Response, SharedGraph};
use ragraph_tests::{Script, classic_deadlock_script};
use std::collections::BTreeSet;

async fn run(graph: &SharedGraph, script: &Script) -> Result<Vec<Response>> {
    let mut output = Vec::new();
    run_session(graph, script.render().as_bytes(), &mut output).await?;
    Ok(String::from_utf8(output)?
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?)
}

fn edge_pairs(response: &Response) -> BTreeSet<(String, String)> {
    response
        .state
        .edges
        .iter()
        .map(|e| (e.from.clone(), e.to.clone()))
        .collect()
}

#[tokio::test]
async fn e2e_classic_deadlock_then_resolve_by_removal() -> Result<()> {
    let graph = SharedGraph::default();
    let script = classic_deadlock_script()
        .push(Request::CheckDeadlock)
        .push(Request::RemoveNode {
            id: "P2".to_string(),
        })
        .push(Request::CheckDeadlock);

    let responses = run(&graph, &script).await?;
    assert_eq!(responses.len(), script.len());
    assert!(responses.iter().all(|r| r.success));

    let found = &responses[8];
    let cycle: BTreeSet<_> = found
        .cycle
        .as_ref()
        .expect("cycle reported")
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(
        cycle,
        BTreeSet::from([("P1", "R1"), ("R1", "P2"), ("P2", "R2"), ("R2", "P1")])
    );

    let after_removal = &responses[10];
    assert!(after_removal.cycle.is_none());
    assert!(
        after_removal
            .state
            .edges
            .iter()
            .all(|e| e.from != "P2" && e.to != "P2")
    );
    Ok(())
}

#[tokio::test]
async fn e2e_undo_walks_back_to_empty() -> Result<()> {
    let graph = SharedGraph::default();
    let mut script = classic_deadlock_script();
    for _ in 0..8 {
        script = script.push(Request::Undo);
    }
    script = script.push(Request::Undo);

    let responses = run(&graph, &script).await?;
    let last_undo = &responses[15];
    assert!(last_undo.state.nodes.is_empty());
    assert!(last_undo.message.is_none());

    let extra_undo = &responses[16];
    assert!(extra_undo.success);
    assert_eq!(extra_undo.message.as_deref(), Some("Nothing to undo"));
    Ok(())
}

#[tokio::test]
async fn e2e_redo_restores_pre_undo_state() -> Result<()> {
    let graph = SharedGraph::default();
    let script = classic_deadlock_script()
        .push(Request::RemoveEdge {
            from: "R2".to_string(),
            to: "P1".to_string(),
        })
        .push(Request::Undo)
        .push(Request::Redo);

    let responses = run(&graph, &script).await?;
    let removed = &responses[8];
    let redone = &responses[10];
    assert_eq!(edge_pairs(removed), edge_pairs(redone));
    assert_eq!(edge_pairs(&responses[9]).len(), 4);
    Ok(())
}

#[tokio::test]
async fn e2e_mutation_after_undo_discards_redo() -> Result<()> {
    let graph = SharedGraph::default();
    let script = Script::new()
        .add_process("P1")
        .push(Request::Undo)
        .add_resource("R1")
        .push(Request::Redo);

    let responses = run(&graph, &script).await?;
    let redo = &responses[3];
    assert_eq!(redo.message.as_deref(), Some("Nothing to redo"));
    assert_eq!(redo.state.nodes.len(), 1);
    assert_eq!(redo.state.nodes[0].id, "R1");
    Ok(())
}

#[tokio::test]
async fn e2e_reset_then_undo() -> Result<()> {
    let graph = SharedGraph::default();
    let script = classic_deadlock_script()
        .push(Request::ResetGraph)
        .push(Request::Undo)
        .push(Request::CheckDeadlock);

    let responses = run(&graph, &script).await?;
    let reset = &responses[8];
    assert!(reset.success);
    assert!(reset.state.nodes.is_empty() && reset.state.edges.is_empty());
    assert_eq!(reset.state.history.len(), 1);

    let restored = &responses[9];
    assert_eq!(restored.state.nodes.len(), 4);
    assert_eq!(restored.state.edges.len(), 4);
    assert!(responses[10].cycle.is_some());
    Ok(())
}

#[tokio::test]
async fn e2e_history_preview_never_exceeds_five() -> Result<()> {
    let graph = SharedGraph::default();
    let mut script = Script::new();
    for i in 0..20 {
        script = script.add_process(&format!("P{i}"));
    }

    let responses = run(&graph, &script).await?;
    assert!(responses.iter().all(|r| r.state.history.len() <= 5));
    assert_eq!(responses.last().map(|r| r.state.history.len()), Some(5));
    Ok(())
}

#[tokio::test]
async fn e2e_failures_report_reason_and_leave_state() -> Result<()> {
    let graph = SharedGraph::default();
    let script = Script::new()
        .add_process("P1")
        .request("P1", "R9")
        .add_process("")
        .push(Request::RemoveEdge {
            from: "P1".to_string(),
            to: "P1".to_string(),
        });

    let responses = run(&graph, &script).await?;
    let messages: Vec<_> = responses[1..]
        .iter()
        .map(|r| {
            assert!(!r.success);
            assert_eq!(r.state, responses[0].state);
            r.message.clone().unwrap_or_default()
        })
        .collect();
    assert_eq!(
        messages,
        vec![
            "Node not found: R9",
            "Node id must be a non-empty string",
            "Edge not found: P1 -> P1",
        ]
    );
    Ok(())
}
