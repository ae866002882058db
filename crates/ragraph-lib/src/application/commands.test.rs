use super::*;
use crate::application::protocol::Response;

const DEADLOCK_SCRIPT: &str = r#"
# two processes, two resources
{"op":"add_process","id":"P1"}
{"op":"add_process","id":"P2"}
{"op":"add_resource","id":"R1"}
{"op":"add_resource","id":"R2"}
{"op":"request_resource","process":"P1","resource":"R1"}
{"op":"allocate_resource","process":"P2","resource":"R1"}
{"op":"request_resource","process":"P2","resource":"R2"}
{"op":"allocate_resource","process":"P1","resource":"R2"}
"#;

fn parse_responses(output: &[u8]) -> Vec<Response> {
    std::str::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_session_answers_each_request_line() {
    let graph = SharedGraph::default();
    let mut output = Vec::new();
    let input = format!("{DEADLOCK_SCRIPT}\n{{\"op\":\"add_process\",\"id\":\"P1\"}}\n");

    let summary = run_session(&graph, input.as_bytes(), &mut output)
        .await
        .unwrap();

    assert_eq!(summary, SessionSummary { requests: 9, failures: 1 });
    let responses = parse_responses(&output);
    assert_eq!(responses.len(), 9);
    assert!(responses[..8].iter().all(|r| r.success));
    assert!(!responses[8].success);
    assert_eq!(responses[8].state.edges.len(), 4);
}

#[tokio::test]
async fn test_session_skips_blank_and_comment_lines() {
    let graph = SharedGraph::default();
    let mut output = Vec::new();
    let summary = run_session(&graph, "\n# nothing here\n   \n".as_bytes(), &mut output)
        .await
        .unwrap();

    assert_eq!(summary.requests, 0);
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_session_survives_non_utf8_line() {
    let graph = SharedGraph::default();
    let mut output = Vec::new();
    let mut input = b"{\"op\":\"add_process\",\"id\":\"P1\"}\n".to_vec();
    input.extend_from_slice(b"\xff\xfe\n");
    input.extend_from_slice(b"{\"op\":\"add_process\",\"id\":\"P2\"}\n");

    let summary = run_session(&graph, input.as_slice(), &mut output)
        .await
        .unwrap();

    assert_eq!(summary, SessionSummary { requests: 3, failures: 1 });
    let responses = parse_responses(&output);
    assert_eq!(responses.len(), 3);
    assert!(responses[0].success);
    assert!(!responses[1].success);
    assert!(
        responses[1]
            .message
            .as_deref()
            .is_some_and(|m| m.starts_with("Invalid request:"))
    );
    assert_eq!(responses[1].state.nodes.len(), 1);
    assert!(responses[2].success);
    assert!(graph.read(|g| g.contains("P2")).unwrap());
}

#[tokio::test]
async fn test_session_handles_last_line_without_newline() {
    let graph = SharedGraph::default();
    let mut output = Vec::new();
    let summary = run_session(
        &graph,
        "{\"op\":\"add_process\",\"id\":\"P1\"}\r\n{\"op\":\"get_state\"}".as_bytes(),
        &mut output,
    )
    .await
    .unwrap();

    assert_eq!(summary, SessionSummary { requests: 2, failures: 0 });
    assert_eq!(parse_responses(&output)[1].state.nodes.len(), 1);
}

#[tokio::test]
async fn test_check_script_still_gives_verdict_after_non_utf8_line() {
    let graph = SharedGraph::default();
    let mut script = b"\xc3\x28\n".to_vec();
    script.extend_from_slice(DEADLOCK_SCRIPT.as_bytes());

    let cycle = check_script(&graph, script.as_slice()).await.unwrap();
    assert_eq!(cycle.map(|c| c.len()), Some(4));
}

#[tokio::test]
async fn test_check_script_finds_deadlock() {
    let graph = SharedGraph::default();
    let cycle = check_script(&graph, DEADLOCK_SCRIPT.as_bytes())
        .await
        .unwrap()
        .expect("deadlock expected");
    assert_eq!(cycle.len(), 4);
}

#[tokio::test]
async fn test_check_script_after_undo_is_clean() {
    let graph = SharedGraph::default();
    let script = format!("{DEADLOCK_SCRIPT}\n{{\"op\":\"undo\"}}\n");
    let cycle = check_script(&graph, script.as_bytes()).await.unwrap();
    assert!(cycle.is_none());
}

#[test]
fn test_render_verdict() {
    let cycle = vec![Edge::new("P1", "R1"), Edge::new("R1", "P1")];
    let rendered = console::strip_ansi_codes(&render_verdict(Some(&cycle))).to_string();
    assert_eq!(rendered, "deadlock: P1 -> R1 -> P1");

    let rendered = console::strip_ansi_codes(&render_verdict(None)).to_string();
    assert_eq!(rendered, "ok: no cycle found");
}

