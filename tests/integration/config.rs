//! Tests for `ghup config`

use super::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_config_set_then_show() {
    let ctx = TestContext::new();

    ctx.ghup()
        .args(["config", "set", "--owner", "octocat", "--repo", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Defaults saved"));

    ctx.ghup()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("owner:        octocat"))
        .stdout(predicate::str::contains("repo:         demo"))
        .stdout(predicate::str::contains("branch:       main (default)"));
}

#[test]
fn test_config_file_never_contains_token() {
    let ctx = TestContext::new();

    ctx.ghup()
        .args(["config", "set", "--owner", "octocat"])
        .assert()
        .success();

    let config_path = if cfg!(target_os = "linux") {
        ctx.temp.path().join("config").join("ghup").join("config.yaml")
    } else {
        return;
    };
    let content = std::fs::read_to_string(config_path).unwrap();
    assert!(content.contains("owner: octocat"));
    assert!(!content.contains("token"));
}

#[test]
fn test_config_set_without_values_fails() {
    let ctx = TestContext::new();
    ctx.ghup()
        .args(["config", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to set"));
}

#[test]
fn test_config_clear() {
    let ctx = TestContext::new();

    ctx.ghup()
        .args(["config", "set", "--owner", "octocat"])
        .assert()
        .success();
    ctx.ghup().args(["config", "clear"]).assert().success();

    ctx.ghup()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("owner:        (not set)"));
}
