use super::*;

#[test]
fn test_verbosity_maps_to_levels() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_level_directives() {
    assert_eq!(LogLevel::Warning.as_directive(), "warn");
    assert_eq!(LogLevel::Debug.as_directive(), "debug");
}

#[test]
fn test_parse_value_enums_with_aliases() {
    assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("PLAIN".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("none".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
}

#[test]
fn test_log_format_has_no_yaml_name() {
    let err = "yaml".parse::<LogFormat>().unwrap_err();
    assert!(err.to_string().contains("text, json, pretty"));
}

#[test]
fn test_parse_error_lists_accepted_values() {
    let err = "sparkly".parse::<ColorIntent>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "sparkly");
            assert!(reason.contains("auto, always, never"), "reason was: {reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_explicit_color_intent_ignores_terminal() {
    assert!(ColorIntent::Always.resolve(LogOutput::Stderr));
    assert!(!ColorIntent::Never.resolve(LogOutput::Stdout));
}
