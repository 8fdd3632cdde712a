//! Binary-level CLI tests
//!
//! Only exercise paths that fail before any remote call is made; nothing
//! here touches the network.

use assert_cmd::Command;
use predicates::prelude::*;

fn dsync() -> Command {
    Command::cargo_bin("dsync").unwrap()
}

#[test]
fn missing_local_root_exits_nonzero_with_one_line_error() {
    dsync()
        .args(["check", "--root", "/nonexistent/backup-volume"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn sync_with_missing_root_also_fails_fast() {
    dsync()
        .args(["sync", "--root", "/nonexistent/backup-volume"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_credentials_file_is_reported() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("Documents")).unwrap();

    dsync()
        .args([
            "check",
            "--root",
            temp.path().to_str().unwrap(),
            "--credentials",
            "/nonexistent/credentials.json",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("credentials"));
}

#[test]
fn help_lists_both_commands() {
    dsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("sync"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    dsync().arg("frobnicate").assert().failure();
}
