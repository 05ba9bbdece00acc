//! Vendor recommendation endpoint.
//!
//! The backend compares submitted proposals against the RFP requirements
//! and returns a ranked comparison. Fields are snake_case: this payload is
//! produced by the analysis service, not the storage layer.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::ApiClient;

/// One vendor's scored ranking within a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRanking {
    pub vendor_name: String,
    pub score: f64,
    #[serde(default)]
    pub price_total: serde_json::Value,
    #[serde(default)]
    pub delivery_match: String,
    #[serde(default)]
    pub warranty_match: String,
    #[serde(default)]
    pub payment_terms_match: String,
    #[serde(default)]
    pub item_coverage_score: f64,
    #[serde(default)]
    pub notes: String,
}

/// Ranked vendor comparison for an RFP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub comparison_summary: String,
    pub vendors_ranked: Vec<VendorRanking>,
    pub recommended_vendor: String,
}

impl ApiClient {
    /// Fetches the ranked vendor recommendation for an RFP.
    pub async fn get_recommendation(&self, rfp_id: &str) -> Result<Recommendation> {
        self.get_json(&format!("/recommendation/{rfp_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_total_accepts_string_or_number() {
        let ranking: VendorRanking = serde_json::from_str(
            r#"{"vendor_name": "Acme", "score": 87.5, "price_total": "48,000 USD"}"#,
        )
        .unwrap();
        assert_eq!(ranking.price_total, serde_json::json!("48,000 USD"));

        let ranking: VendorRanking =
            serde_json::from_str(r#"{"vendor_name": "Acme", "score": 87.5, "price_total": 48000}"#)
                .unwrap();
        assert_eq!(ranking.price_total, serde_json::json!(48000));
    }
}
