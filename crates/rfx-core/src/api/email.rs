//! Email dispatch endpoint.
//!
//! Delivery mechanics (SMTP, logging, reminders) belong to the backend;
//! this only submits the send request.

use anyhow::Result;
use serde::Serialize;

use super::ApiClient;

/// Payload for sending an RFP email to a set of vendors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub rfp_id: String,
    pub vendor_ids: Vec<String>,
    pub subject: String,
    pub content: String,
}

impl ApiClient {
    /// Sends an RFP email to the given vendors.
    pub async fn send_email(&self, request: &SendEmailRequest) -> Result<serde_json::Value> {
        self.post_json("/email/send", request).await
    }
}
