//! Configuration loading and global state management

use crate::primitives::ConfigError;
use std::sync::OnceLock;

use super::{config::AppConfig, env::EnvironmentConfig};

// Global configuration available throughout the application
static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Environment files read before CLI parsing, most specific first
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

impl AppConfig {
    /// Load `.env.local` and `.env` into the process environment
    ///
    /// Must run before CLI parsing so `RAGRAPH_*` values from the files are
    /// seen by clap. Missing files are skipped; variables already set are
    /// not overwritten.
    pub fn load_env_files() -> Result<(), ConfigError> {
        for env_file in ENV_FILES {
            if let Err(e) = dotenvy::from_filename(env_file) {
                if !e.not_found() {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve the final config: defaults -> environment -> CLI values
    pub fn resolve(cli_config: AppConfig) -> Result<Self, ConfigError> {
        Self::resolve_with_env(cli_config, &EnvironmentConfig::load()?)
    }

    /// [`AppConfig::resolve`] against an explicit environment
    pub fn resolve_with_env(
        cli_config: AppConfig,
        env_config: &EnvironmentConfig,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.color = env_config.apply_color_config(config.color);

        let config = config.merge_with(cli_config);
        config.validate()?;
        Ok(config)
    }

    /// Initialize global configuration (call once in main)
    pub fn init_global(config: AppConfig) -> Result<(), ConfigError> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| ConfigError::AlreadyInitialized)
    }

    /// Global configuration, if initialized
    pub fn global() -> Option<&'static AppConfig> {
        GLOBAL_CONFIG.get()
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
