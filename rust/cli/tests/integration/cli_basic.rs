use crate::helpers::cli_runner::CliRunner;
use serial_test::serial;

#[test]
#[serial]
fn help_lists_all_commands() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["play", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
#[serial]
fn version_prints_version_and_exits_zero() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("pokertrack"));
}

#[test]
#[serial]
fn unknown_subcommand_shows_help_excerpt_on_stderr() {
    let res = CliRunner::new().run(&["sim"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain the command list\n---stderr---\n{}",
        res.stderr
    );
    assert!(res.stderr.contains("  cfg"));
}

#[test]
#[serial]
fn play_help_documents_flags() {
    let res = CliRunner::new().run(&["play", "--help"]);
    assert_eq!(res.exit_code, 0);
    for flag in ["--players", "--dealer", "--start", "--hand-counting"] {
        assert!(res.stdout.contains(flag), "play help should list {}", flag);
    }
}
