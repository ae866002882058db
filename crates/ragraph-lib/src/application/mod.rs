//! Application layer modules
//!
//! CLI interface, configuration management and the request protocol that
//! drives the graph engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;
pub mod protocol;

pub use cli::{Cli, CliConfig, Commands};
pub use commands::{CommandOutcome, execute_command};
pub use config::AppConfig;
pub use protocol::{Request, Response, SharedGraph};
