//! # ragraph Library
//!
//! Resource allocation graphs for deadlock analysis.
//!
//! ## Core Modules
//!
//! - [`graph`] - Graph engine: mutation, undo/redo history, cycle detection
//! - [`application`] - CLI, configuration and the JSON request protocol
//! - [`logger`] - Structured logging setup
//! - [`primitives`] - Shared configuration types and errors
//!
//! ## Quick Start
//!
//! ```
//! use ragraph_lib::graph::ResourceGraph;
//!
//! let mut graph = ResourceGraph::new();
//! graph.add_process("P1").unwrap();
//! graph.add_resource("R1").unwrap();
//! graph.request_resource("P1", "R1").unwrap();
//! graph.allocate_resource("P1", "R1").unwrap();
//! assert_eq!(graph.check_deadlock().map(|cycle| cycle.len()), Some(2));
//!
//! graph.undo();
//! assert!(graph.check_deadlock().is_none());
//! ```

pub mod application;
pub mod graph;
pub mod logger;
pub mod primitives;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, CliConfig, CommandOutcome, Commands, execute_command};
pub use graph::{Action, Edge, GraphError, GraphState, NodeKind, ResourceGraph};
pub use logger::Logger;
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};

use anyhow::Result;
use std::process::ExitCode;

pub async fn main() -> Result<ExitCode> {
    // .env files must be in the environment before clap reads RAGRAPH_* vars
    AppConfig::load_env_files()?;
    let cli = CliConfig::load();
    let config = AppConfig::resolve(cli.app_config)?;

    Logger::init(config.to_logger_config())?;
    AppConfig::init_global(config.clone())?;

    let outcome = execute_command(config, cli.command).await?;
    Ok(outcome.into())
}
