use super::*;
use crate::primitives::{ColorIntent, LogFormat};

#[test]
fn test_resolve_defaults() {
    let config =
        AppConfig::resolve_with_env(AppConfig::default(), &EnvironmentConfig::default()).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_environment_color_applies_under_cli_defaults() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let config = AppConfig::resolve_with_env(AppConfig::default(), &env).unwrap();
    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_cli_color_overrides_environment() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let cli = AppConfig {
        color: ColorIntent::Always,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };
    let config = AppConfig::resolve_with_env(cli, &env).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_resolve_validates() {
    let cli = AppConfig {
        log_level: 42,
        ..AppConfig::default()
    };
    assert!(AppConfig::resolve_with_env(cli, &EnvironmentConfig::default()).is_err());
}
