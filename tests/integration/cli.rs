//! Tests for argument parsing and help output

use super::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let ctx = TestContext::new();
    ctx.ghup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_upload_requires_file_argument() {
    let ctx = TestContext::new();
    ctx.ghup()
        .arg("upload")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn test_login_rejects_malformed_token() {
    let ctx = TestContext::new();
    ctx.ghup()
        .args(["login", "--token", "hunter2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid githubToken format"));
}

#[test]
fn test_logout_help() {
    // Running logout for real would remove the developer's keychain entry
    let ctx = TestContext::new();
    ctx.ghup()
        .args(["logout", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remove the stored GitHub token"));
}
