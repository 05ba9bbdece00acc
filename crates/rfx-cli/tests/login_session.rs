//! Integration tests for `rfx login` / `rfx whoami` / `rfx logout`.

mod fixtures;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_stores_session() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/usr_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::user_json("usr_1", "Dana", "dana@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args(["login", "usr_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as Dana"));

    let stored = std::fs::read_to_string(home.path().join("session.toml")).unwrap();
    assert!(stored.contains("usr_1"));

    // whoami reads the stored session without touching the backend.
    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana <dana@example.com> (usr_1)"));
}

#[tokio::test]
async fn test_login_rejects_unknown_user() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("User not found"))
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args(["login", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid user id 'ghost'"));

    assert!(!home.path().join("session.toml").exists());
}

#[test]
fn test_whoami_without_session_hints_login() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rfx login"));
}

#[test]
fn test_logout_removes_session() {
    let home = TempDir::new().unwrap();
    fixtures::write_session(home.path(), "usr_1", "Dana", "dana@example.com");

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(!home.path().join("session.toml").exists());
}
