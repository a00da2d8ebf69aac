use assert_cmd::Command;
use predicates::prelude::*;

fn razzie() -> Command {
    Command::cargo_bin("razzie").expect("binary should build")
}

#[test]
fn test_help_lists_subcommands() {
    razzie()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("movies"))
        .stdout(predicate::str::contains("winners"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_no_command_prints_guidance() {
    razzie()
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands"));
}

#[test]
fn test_winners_requires_a_year() {
    razzie().arg("winners").assert().failure();
}

#[test]
fn test_winners_rejects_non_integer_year() {
    razzie()
        .args(["winners", "--year", "nineteen-ninety"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--year"));
}

#[test]
fn test_unreachable_api_is_reported_as_error() {
    // Port 1 on localhost refuses immediately; no server is ever there.
    razzie()
        .args(["dashboard", "--api-url", "http://127.0.0.1:1/api/movies"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
