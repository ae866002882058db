//! Application configuration
//!
//! Precedence: defaults -> .env files -> environment -> CLI flags.

use crate::primitives::*;
use clap::Parser;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
    pub const HISTORY_LIMIT: &str = "1000";

    /// Highest accepted verbosity
    pub const MAX_LOG_LEVEL: u8 = 4;
}

/// Typed versions of [`defaults`]
mod default_fns {
    use super::defaults;
    use crate::primitives::{ColorIntent, LogFormat, LogOutput};

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap_or(0)
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap_or(LogFormat::Text)
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap_or(LogOutput::Stderr)
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR.parse().unwrap_or(ColorIntent::Auto)
    }

    pub fn history_limit() -> usize {
        defaults::HISTORY_LIMIT
            .parse()
            .unwrap_or(crate::graph::DEFAULT_HISTORY_LIMIT)
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct AppConfig {
    /// Maximum number of undoable actions kept (0 = unlimited)
    #[arg(long, env = "RAGRAPH_HISTORY_LIMIT", default_value = defaults::HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "RAGRAPH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "RAGRAPH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "RAGRAPH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "RAGRAPH_COLOR", default_value = defaults::COLOR)]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: default_fns::history_limit(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Resolve the logger settings for this configuration
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color.resolve(self.log_output),
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.history_limit != default_fns::history_limit() {
            self.history_limit = other.history_limit;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }
        if other.log_format != default_fns::log_format() {
            self.log_format = other.log_format;
        }
        if other.log_output != default_fns::log_output() {
            self.log_output = other.log_output;
        }
        if other.color != default_fns::color() {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level > defaults::MAX_LOG_LEVEL {
            return Err(ConfigError::ValidationFailed {
                reason: format!(
                    "log level {} is out of range 0-{}",
                    self.log_level,
                    defaults::MAX_LOG_LEVEL
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
