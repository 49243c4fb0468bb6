//! Tests for `ghup upload` against a mocked contents API

use super::common::TestContext;
use predicates::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_upload_json_success() {
    let github = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/demo/contents/notes%20v1.txt"))
        .and(header("authorization", "token ghp_clitoken"))
        .and(body_json(json!({
            "message": "Add notes",
            "content": "bm90ZXM=",
            "branch": "main"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "content": { "html_url": "X", "download_url": "Y" }
        })))
        .expect(1)
        .mount(&github)
        .await;

    let ctx = TestContext::new();
    let file = ctx.file("notes v1.txt", b"notes");

    let output = ctx
        .ghup()
        .arg("upload")
        .arg(&file)
        .args(["--token", "ghp_clitoken", "--owner", "octocat", "--repo", "demo"])
        .args(["-m", "Add notes", "--json", "--api-url", &github.uri()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let envelope: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        envelope,
        json!({ "success": true, "url": "X", "download_url": "Y" })
    );
}

#[tokio::test]
async fn test_upload_uses_saved_defaults_and_env_token() {
    let github = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/demo/contents/assets/logo.png"))
        .and(header("authorization", "token ghp_fromenv"))
        .and(body_json(json!({
            "message": "Add logo",
            "content": "iVBORw==",
            "branch": "gh-pages"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "content": { "html_url": "X", "download_url": "Y" }
        })))
        .expect(1)
        .mount(&github)
        .await;

    let ctx = TestContext::new();
    ctx.ghup()
        .args(["config", "set", "--owner", "octocat", "--repo", "demo"])
        .args(["--branch", "gh-pages", "--api-url", &github.uri()])
        .assert()
        .success();

    let file = ctx.file("logo.png", &[0x89, 0x50, 0x4e, 0x47]);

    ctx.ghup()
        .arg("upload")
        .arg(&file)
        .args(["--path", "assets/logo.png", "-m", "Add logo"])
        .env("GITHUB_TOKEN", "ghp_fromenv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploading"))
        .stdout(predicate::str::contains("octocat/demo@gh-pages:assets/logo.png"))
        .stdout(predicate::str::contains("File:     X"))
        .stdout(predicate::str::contains("Download: Y"));
}

#[tokio::test]
async fn test_upload_conflict_reports_message() {
    let github = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "message": "M" })))
        .expect(1)
        .mount(&github)
        .await;

    let ctx = TestContext::new();
    let file = ctx.file("a.txt", b"a");

    let output = ctx
        .ghup()
        .arg("upload")
        .arg(&file)
        .args(["--token", "ghp_clitoken", "--owner", "octocat", "--repo", "demo"])
        .args(["-m", "Add a", "--json", "--api-url", &github.uri()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let envelope: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["success"], json!(false));
    assert_eq!(envelope["error"], json!("M"));
    assert!(envelope.get("url").is_none());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HTTP 409"));
    assert!(stderr.contains("help:"));
}

#[tokio::test]
async fn test_upload_without_token_makes_no_request() {
    let github = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&github)
        .await;

    let ctx = TestContext::new();
    let file = ctx.file("a.txt", b"a");

    ctx.ghup()
        .arg("upload")
        .arg(&file)
        .args(["--owner", "octocat", "--repo", "demo", "-m", "Add a"])
        .args(["--api-url", &github.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Field githubToken is required"));
}

#[test]
fn test_upload_missing_file_fails() {
    let ctx = TestContext::new();

    ctx.ghup()
        .args(["upload", "does-not-exist.bin", "--token", "ghp_clitoken"])
        .args(["--owner", "octocat", "--repo", "demo", "-m", "Add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.bin"));
}
