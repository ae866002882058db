//! Standard environment variables that influence color output

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Conventional color/CI environment variables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR (any non-empty value disables color)
    pub no_color: Option<String>,
    /// FORCE_COLOR (0/false disables, 1/2/3/true enables)
    pub force_color: Option<String>,
    /// CLICOLOR (0 disables color)
    pub clicolor: Option<String>,
    /// CI (any value disables color)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load from the current process environment
    pub fn load() -> Result<Self, ConfigError> {
        envy::from_env().map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Load from an explicit set of variables
    pub fn from_pairs<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Apply environment overrides to a color intent
    ///
    /// CI wins outright; otherwise CLICOLOR, then NO_COLOR, then FORCE_COLOR,
    /// each later one overriding the earlier.
    pub fn apply_color_config(&self, mut color: ColorIntent) -> ColorIntent {
        if self.ci.is_some() {
            return ColorIntent::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = ColorIntent::Never;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            color = ColorIntent::Never;
        }

        match self.force_color.as_deref() {
            Some("0" | "false") => color = ColorIntent::Never,
            Some("1" | "2" | "3" | "true") => color = ColorIntent::Always,
            _ => {}
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
