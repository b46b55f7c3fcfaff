use exo::commands::Cli;
use exo::RunConfig;
use serial_test::serial;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("exo").chain(args.iter().copied());
    Cli::try_parse_command_from(argv).expect("expected command parsing to succeed")
}

#[test]
fn runs_without_any_flags() {
    let cli = parse(&[]);
    assert_eq!(
        cli,
        Cli {
            marker: None,
            concurrency: None,
            log_level: None,
            log_file: None,
        }
    );
}

#[test]
fn accepts_optional_tuning_flags() {
    let cli = parse(&[
        "--marker",
        "KotlinCompileDaemon",
        "--concurrency",
        "2",
        "--log-level",
        "exo=debug",
        "--log-file",
        "/tmp/exo.log",
    ]);
    assert_eq!(cli.marker.as_deref(), Some("KotlinCompileDaemon"));
    assert_eq!(cli.concurrency, Some(2));
    assert_eq!(cli.log_level.as_deref(), Some("exo=debug"));
    assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/exo.log")));
}

#[test]
fn rejects_subcommands_and_unknown_flags() {
    assert!(Cli::try_parse_command_from(["exo", "kill"]).is_err());
    assert!(Cli::try_parse_command_from(["exo", "--force"]).is_err());
    assert!(Cli::try_parse_command_from(["exo", "--concurrency", "many"]).is_err());
}

#[test]
fn version_flag_is_handled_by_clap() {
    let err = Cli::try_parse_command_from(["exo", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
#[serial]
fn parsed_flags_feed_the_run_config() {
    std::env::remove_var("EXO_MARKER");
    let cli = parse(&["--marker", "Launcher", "--concurrency", "3"]);
    let config = RunConfig::resolve(cli.marker, cli.concurrency);
    assert_eq!(config.marker, "Launcher");
    assert_eq!(config.concurrency, 3);
    assert_eq!(config.listing_bin, "jps");
}
