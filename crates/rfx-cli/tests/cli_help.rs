//! Smoke tests for the CLI surface.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("rfx")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("rfps"))
        .stdout(predicate::str::contains("vendors"))
        .stdout(predicate::str::contains("proposals"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_rfps_help_lists_subcommands() {
    cargo_bin_cmd!("rfx")
        .args(["rfps", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_send_rejects_subject_with_generate() {
    cargo_bin_cmd!("rfx")
        .args([
            "send",
            "rfp_1",
            "--generate",
            "--subject",
            "Manual subject",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
