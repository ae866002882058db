use super::*;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.history_limit, crate::graph::DEFAULT_HISTORY_LIMIT);
}

#[test]
fn test_merge_takes_non_default_values() {
    let merged = AppConfig::default().merge_with(AppConfig {
        history_limit: 50,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    });

    assert_eq!(merged.history_limit, 50);
    assert_eq!(merged.log_format, LogFormat::Json);
    assert_eq!(merged.log_level, 0);
}

#[test]
fn test_merge_keeps_base_when_other_is_default() {
    let base = AppConfig {
        color: ColorIntent::Never,
        log_level: 3,
        ..AppConfig::default()
    };
    let merged = base.clone().merge_with(AppConfig::default());
    assert_eq!(merged, base);
}

#[test]
fn test_validate_rejects_excess_verbosity() {
    let config = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn test_logger_config_follows_app_config() {
    let config = AppConfig {
        log_level: 3,
        log_output: LogOutput::Stdout,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Debug);
    assert_eq!(logger.output, LogOutput::Stdout);
    assert!(!logger.ansi);
}
