//! Integration tests for `rfx rfps list` and `rfx rfps show`.

mod fixtures;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_rfps_list_empty() {
    let home = TempDir::new().unwrap();
    fixtures::write_session(home.path(), "usr_1", "Dana", "dana@example.com");
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rfp/all/usr_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args(["rfps", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No RFPs found."));
}

#[tokio::test]
async fn test_rfps_list_shows_titles_and_truncates_descriptions() {
    let home = TempDir::new().unwrap();
    fixtures::write_session(home.path(), "usr_1", "Dana", "dana@example.com");
    let server = MockServer::start().await;

    let long_description = "x".repeat(80);
    Mock::given(method("GET"))
        .and(path("/rfp/all/usr_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            fixtures::rfp_json("rfp_1", "usr_1", "Laptops", &long_description),
            fixtures::rfp_json("rfp_2", "usr_1", "Desks", "20 standing desks"),
        ])))
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args(["rfps", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptops"))
        .stdout(predicate::str::contains("Desks"))
        .stdout(predicate::str::contains(format!("{}...", "x".repeat(40))))
        .stdout(predicate::str::contains(long_description).not());
}

#[tokio::test]
async fn test_rfps_show_prints_structured_requirements() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rfp/rfp_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::rfp_json("rfp_1", "usr_1", "Laptops", "40 laptops")),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args(["rfps", "show", "rfp_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptops"))
        .stdout(predicate::str::contains("Structured Requirements"))
        .stdout(predicate::str::contains("\"budget\": 50000"));
}

#[test]
fn test_rfps_list_requires_login() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .args(["rfps", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rfx login"));
}
