//! Integration tests for `rfx recommend`.

mod fixtures;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn recommendation_json() -> serde_json::Value {
    serde_json::json!({
        "comparison_summary": "Acme undercuts Globex on price with equal coverage.",
        "vendors_ranked": [
            {
                "vendor_name": "Acme",
                "score": 87.5,
                "price_total": "48,000 USD",
                "delivery_match": "yes",
                "warranty_match": "partial",
                "payment_terms_match": "yes",
                "item_coverage_score": 1.0,
                "notes": "Fastest delivery."
            },
            {
                "vendor_name": "Globex",
                "score": 74.0,
                "price_total": 52000,
                "delivery_match": "no",
                "warranty_match": "yes",
                "payment_terms_match": "yes",
                "item_coverage_score": 0.9,
                "notes": ""
            }
        ],
        "recommended_vendor": "Acme"
    })
}

#[tokio::test]
async fn test_recommend_prints_ranked_table() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recommendation/rfp_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recommendation_json()))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args(["recommend", "rfp_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme undercuts Globex"))
        .stdout(predicate::str::contains("87.5"))
        .stdout(predicate::str::contains("48,000 USD"))
        .stdout(predicate::str::contains("Recommended vendor: Acme"));
}

#[tokio::test]
async fn test_recommend_surfaces_backend_error() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recommendation/rfp_404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("RFP not found"))
        .mount(&server)
        .await;

    cargo_bin_cmd!("rfx")
        .env("RFX_HOME", home.path())
        .env("RFX_API_BASE_URL", server.uri())
        .args(["recommend", "rfp_404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RFP not found"));
}
