use super::*;
use crate::primitives::ColorIntent;

#[test]
fn test_no_subcommand_parses() {
    let cli = CliConfig::try_from_args(["ragraph"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.command.unwrap_or_default(), Commands::Run { script: None });
}

#[test]
fn test_check_with_script_and_flags() {
    let cli = CliConfig::try_from_args([
        "ragraph",
        "--history-limit",
        "10",
        "--color",
        "never",
        "check",
        "scenario.jsonl",
    ])
    .unwrap();

    assert_eq!(cli.app_config.history_limit, 10);
    assert_eq!(cli.app_config.color, ColorIntent::Never);
    assert_eq!(
        cli.command,
        Some(Commands::Check {
            script: Some(PathBuf::from("scenario.jsonl"))
        })
    );
}

#[test]
fn test_invalid_log_format_rejected() {
    assert!(CliConfig::try_from_args(["ragraph", "--log-format", "xml"]).is_err());
}
