//! Command execution handlers
//!
//! Scripts are newline-delimited JSON requests. Blank lines and lines
//! starting with `#` are skipped.

use crate::application::config::AppConfig;
use crate::application::protocol::SharedGraph;
use crate::application::Commands;
use crate::graph::{Edge, deadlock};
use crate::primitives::LogOutput;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::process::ExitCode;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed,
    DeadlockFound,
}

impl From<CommandOutcome> for ExitCode {
    fn from(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Completed => ExitCode::SUCCESS,
            CommandOutcome::DeadlockFound => ExitCode::from(2),
        }
    }
}

/// Counts gathered while running a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub requests: usize,
    pub failures: usize,
}

/// Execute a CLI command against a fresh graph
pub async fn execute_command(
    config: AppConfig,
    command: Option<Commands>,
) -> Result<CommandOutcome> {
    console::set_colors_enabled(config.color.resolve(LogOutput::Stdout));
    let graph = SharedGraph::with_history_limit(config.history_limit);

    match command.unwrap_or_default() {
        Commands::Run { script } => handle_run(&graph, script.as_deref()).await,
        Commands::Check { script } => handle_check(&graph, script.as_deref()).await,
        Commands::Version => {
            println!("ragraph {}", env!("CARGO_PKG_VERSION"));
            Ok(CommandOutcome::Completed)
        }
    }
}

async fn handle_run(graph: &SharedGraph, script: Option<&Path>) -> Result<CommandOutcome> {
    let mut stdout = tokio::io::stdout();
    let summary = match script {
        Some(path) => run_session(graph, open_script(path).await?, &mut stdout).await?,
        None => run_session(graph, BufReader::new(tokio::io::stdin()), &mut stdout).await?,
    };

    info!(
        requests = summary.requests,
        failures = summary.failures,
        "Session finished"
    );
    Ok(CommandOutcome::Completed)
}

async fn handle_check(graph: &SharedGraph, script: Option<&Path>) -> Result<CommandOutcome> {
    let cycle = match script {
        Some(path) => check_script(graph, open_script(path).await?).await?,
        None => check_script(graph, BufReader::new(tokio::io::stdin())).await?,
    };

    println!("{}", render_verdict(cycle.as_deref()));
    Ok(match cycle {
        Some(_) => CommandOutcome::DeadlockFound,
        None => CommandOutcome::Completed,
    })
}

async fn open_script(path: &Path) -> Result<BufReader<tokio::fs::File>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open script: {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Answer every request line from `input` with one JSON line on `output`
///
/// Lines that are not valid UTF-8 or not a valid request get a failed
/// response; the session carries on with the next line.
pub async fn run_session<R, W>(
    graph: &SharedGraph,
    input: R,
    output: &mut W,
) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut input = input;
    let mut buf = Vec::new();
    let mut summary = SessionSummary::default();

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read request")?;
        if read == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(text) => {
                let line = text.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                graph.handle_line(line)?
            }
            Err(e) => {
                warn!(error = %e, "Rejected request that is not UTF-8");
                graph.reject(e)?
            }
        };

        summary.requests += 1;
        if !response.success {
            summary.failures += 1;
            debug!(message = ?response.message, "Request failed");
        }

        let mut encoded = response.to_json_line()?;
        encoded.push('\n');
        output
            .write_all(encoded.as_bytes())
            .await
            .context("Failed to write response")?;
    }

    output.flush().await.context("Failed to flush responses")?;
    Ok(summary)
}

/// Replay `input` without emitting responses, then look for a deadlock
pub async fn check_script<R>(graph: &SharedGraph, input: R) -> Result<Option<Vec<Edge>>>
where
    R: AsyncBufRead + Unpin,
{
    let summary = run_session(graph, input, &mut tokio::io::sink()).await?;
    debug!(requests = summary.requests, failures = summary.failures, "Replayed script");
    Ok(graph.read(|g| g.check_deadlock())?)
}

/// Human-readable deadlock verdict
pub fn render_verdict(cycle: Option<&[Edge]>) -> String {
    match cycle {
        Some(edges) => format!(
            "{} {}",
            style("deadlock:").red().bold(),
            deadlock::cycle_path(edges).join(" -> ")
        ),
        None => format!("{} no cycle found", style("ok:").green().bold()),
    }
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
