use ragraph_lib::application::env::EnvironmentConfig;
use ragraph_lib::application::{AppConfig, CliConfig};
use ragraph_lib::primitives::{ColorIntent, ConfigError, LogFormat, LogOutput};

#[test]
fn test_cli_flags_flow_into_resolved_config() {
    let cli = CliConfig::try_from_args([
        "ragraph",
        "--log-level",
        "2",
        "--log-format",
        "json",
        "--log-output",
        "stdout",
        "--history-limit",
        "25",
    ])
    .unwrap();

    let config = AppConfig::resolve_with_env(cli.app_config, &EnvironmentConfig::default()).unwrap();
    assert_eq!(config.log_level, 2);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.log_output, LogOutput::Stdout);
    assert_eq!(config.history_limit, 25);
}

#[test]
fn test_force_color_environment_without_cli_override() {
    let env = EnvironmentConfig::from_pairs([("FORCE_COLOR".to_string(), "1".to_string())]).unwrap();
    let cli = CliConfig::try_from_args(["ragraph"]).unwrap();

    let config = AppConfig::resolve_with_env(cli.app_config, &env).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_out_of_range_log_level_fails_validation() {
    let cli = CliConfig::try_from_args(["ragraph", "--log-level", "7"]).unwrap();
    let err = AppConfig::resolve_with_env(cli.app_config, &EnvironmentConfig::default()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_logger_config_from_resolved_config() {
    let config = AppConfig {
        log_level: 4,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config();
    assert!(!logger.ansi);
    assert_eq!(logger.format, LogFormat::Text);
}
