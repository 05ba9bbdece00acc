//! Proposal endpoints.
//!
//! Proposals are created by the backend's extraction pipeline when vendors
//! reply; the client only lists and deletes them.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::ApiClient;

/// A vendor's submitted proposal for an RFP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub rfp_vendor_id: String,
    #[serde(default)]
    pub raw_text: String,
    /// Extracted pricing/terms fields; shape owned by the extraction service.
    #[serde(default)]
    pub extracted_data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCount {
    pub deleted_count: u64,
}

impl ApiClient {
    /// Lists every proposal across all RFPs.
    pub async fn list_proposals(&self) -> Result<Vec<Proposal>> {
        self.get_json("/proposal/all").await
    }

    /// Lists proposals submitted under one RFP-vendor link.
    pub async fn list_vendor_proposals(&self, rfp_vendor_id: &str) -> Result<Vec<Proposal>> {
        self.get_json(&format!("/proposal/vendor/{rfp_vendor_id}"))
            .await
    }

    /// Deletes a single proposal.
    pub async fn delete_proposal(&self, proposal_id: &str) -> Result<serde_json::Value> {
        self.delete_json(&format!("/proposal/delete/{proposal_id}"))
            .await
    }

    /// Deletes every proposal under one RFP-vendor link.
    pub async fn delete_vendor_proposals(&self, rfp_vendor_id: &str) -> Result<DeletedCount> {
        self.delete_json(&format!("/proposal/delete/vendor/{rfp_vendor_id}"))
            .await
    }
}
