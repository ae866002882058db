use super::*;

#[test]
fn test_default_filter_quiet_levels_apply_everywhere() {
    assert_eq!(
        Logger::default_filter(LogLevel::Error),
        "ragraph_lib=error,ragraph=error,error"
    );
}

#[test]
fn test_default_filter_caps_external_crates_at_warn() {
    assert_eq!(
        Logger::default_filter(LogLevel::Trace),
        "ragraph_lib=trace,ragraph=trace,warn"
    );
}

#[test]
fn test_logger_init_once() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // Another test binary thread may have installed a subscriber first
    match Logger::init(config.clone()) {
        Ok(logger) => assert_eq!(logger.config().level, LogLevel::Error),
        Err(LoggerError::AlreadyInitialized) | Err(LoggerError::InitializationFailed { .. }) => {}
    }

    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized) | Err(LoggerError::InitializationFailed { .. })
    ));
}
