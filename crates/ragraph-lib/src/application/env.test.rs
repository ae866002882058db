use super::*;

fn env(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_pairs(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_empty_environment_keeps_intent() {
    let config = env(&[]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_no_color_disables() {
    let config = env(&[("NO_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let config = env(&[("NO_COLOR", "")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_force_color_beats_no_color() {
    let config = env(&[("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
fn test_ci_always_disables() {
    let config = env(&[("CI", "true"), ("FORCE_COLOR", "3")]);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_clicolor_zero_disables() {
    let config = env(&[("CLICOLOR", "0")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}
