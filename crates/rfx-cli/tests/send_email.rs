//! Integration tests for `rfx send`.

mod fixtures;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_send_with_generated_template() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rfp/generate-email"))
        .and(body_partial_json(serde_json::json!({ "rfpId": "rfp_1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::generated_email_json(
            "Request for Proposal – Laptops",
            "Dear vendor, please quote 40 laptops.",
            "Thanks & Regards,\nDana",
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/email/send"))
        .and(body_partial_json(serde_json::json!({
            "rfpId": "rfp_1",
            "vendorIds": ["ven_1", "ven_2"],
            "subject": "Request for Proposal – Laptops"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"sent": 2})))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args([
            "send", "rfp_1", "--vendor", "ven_1", "--vendor", "ven_2", "--generate",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email sent to 2 vendor(s)."));
}

#[tokio::test]
async fn test_send_defaults_to_all_vendors() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vendor/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            fixtures::vendor_json("ven_1", "Acme"),
            fixtures::vendor_json("ven_2", "Globex"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/email/send"))
        .and(body_partial_json(
            serde_json::json!({ "vendorIds": ["ven_1", "ven_2"] }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"sent": 2})))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args([
            "send",
            "rfp_1",
            "--subject",
            "Quote request",
            "--content",
            "Please send your best offer.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email sent to 2 vendor(s)."));
}

#[tokio::test]
async fn test_send_fails_when_generation_fails() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rfp/generate-email"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Invalid JSON from LLM"))
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args(["send", "rfp_1", "--vendor", "ven_1", "--generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("generate email template"))
        .stderr(predicate::str::contains("500"));
}

#[tokio::test]
async fn test_send_fails_with_no_vendors() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vendor/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args([
            "send",
            "rfp_1",
            "--subject",
            "Quote request",
            "--content",
            "Body",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vendors to send to"));
}
