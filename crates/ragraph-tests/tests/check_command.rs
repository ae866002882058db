//! E2E tests for the check command and script files

use anyhow::Result;
use ragraph_lib::application::commands::check_script;
use ragraph_lib::application::{AppConfig, CommandOutcome, Commands, Request, SharedGraph};
use ragraph_lib::execute_command;
use ragraph_tests::{Script, ScriptEnvironment, classic_deadlock_script};

#[tokio::test]
async fn e2e_check_reports_deadlock_outcome() -> Result<()> {
    let env = ScriptEnvironment::new()?;
    let path = env.write_script("deadlock.jsonl", &classic_deadlock_script())?;

    let outcome = execute_command(
        AppConfig::default(),
        Some(Commands::Check { script: Some(path) }),
    )
    .await?;
    assert_eq!(outcome, CommandOutcome::DeadlockFound);
    Ok(())
}

#[tokio::test]
async fn e2e_check_clean_graph_completes() -> Result<()> {
    let env = ScriptEnvironment::new()?;
    let script = classic_deadlock_script().push(Request::RemoveEdge {
        from: "P1".to_string(),
        to: "R1".to_string(),
    });
    let path = env.write_script("clean.jsonl", &script)?;

    let outcome = execute_command(
        AppConfig::default(),
        Some(Commands::Check { script: Some(path) }),
    )
    .await?;
    assert_eq!(outcome, CommandOutcome::Completed);
    Ok(())
}

#[tokio::test]
async fn e2e_check_missing_script_errors() -> Result<()> {
    let env = ScriptEnvironment::new()?;
    let missing = env.temp_dir.path().join("nope.jsonl");

    let err = execute_command(
        AppConfig::default(),
        Some(Commands::Check {
            script: Some(missing),
        }),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Failed to open script"));
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_lines_do_not_abort_replay() -> Result<()> {
    let mut content = classic_deadlock_script().render();
    content.push_str("this is not json\n{\"op\":\"remove_node\"}\n");

    let graph = SharedGraph::default();
    let cycle = check_script(&graph, content.as_bytes()).await?;
    assert_eq!(cycle.map(|c| c.len()), Some(4));
    Ok(())
}

#[tokio::test]
async fn e2e_history_limit_bounds_undo_depth() -> Result<()> {
    let graph = SharedGraph::with_history_limit(2);
    let mut script = Script::new().add_process("A").add_process("B").add_process("C");
    for _ in 0..3 {
        script = script.push(Request::Undo);
    }

    check_script(&graph, script.render().as_bytes()).await?;
    let remaining = graph.read(|g| g.state().nodes)?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "A");
    Ok(())
}
