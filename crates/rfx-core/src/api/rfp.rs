//! RFP endpoints.
//!
//! RFPs are created from free text; the backend structures the request into
//! budget/items/quantities/warranty/delivery/payment fields via its LLM
//! pipeline and stores the result alongside the original description.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::ApiClient;

/// A request-for-proposal document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfp {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Backend-structured requirements (budget, items, quantities, ...).
    /// Kept as raw JSON: the shape is owned by the extraction pipeline.
    #[serde(default)]
    pub structured_requirements: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRfpRequest<'a> {
    text: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateEmailRequest<'a> {
    rfp_id: &'a str,
}

/// An email template generated for an RFP.
///
/// The three fields are concatenated into one preview blob by the caller;
/// see [`compose`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEmail {
    pub subject: String,
    pub content: String,
    pub footer: String,
}

/// Composes the generated fields into the single preview string.
///
/// Subject, body and footer separated by blank lines, matching the layout
/// the email is sent with. Empty fields are skipped, so a fully empty
/// template composes to an empty string.
pub fn compose(email: &GeneratedEmail) -> String {
    [&email.subject, &email.content, &email.footer]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl ApiClient {
    /// Creates an RFP from a free-text procurement request.
    pub async fn create_rfp(&self, text: &str, user_id: &str) -> Result<Rfp> {
        self.post_json("/rfp/create", &CreateRfpRequest { text, user_id })
            .await
    }

    /// Lists all RFPs belonging to a user.
    pub async fn list_rfps(&self, user_id: &str) -> Result<Vec<Rfp>> {
        self.get_json(&format!("/rfp/all/{user_id}")).await
    }

    /// Fetches a single RFP by id.
    pub async fn get_rfp(&self, id: &str) -> Result<Rfp> {
        self.get_json(&format!("/rfp/{id}")).await
    }

    /// Deletes an RFP.
    pub async fn delete_rfp(&self, id: &str) -> Result<serde_json::Value> {
        self.delete_json(&format!("/rfp/{id}")).await
    }

    /// Asks the backend to generate an email template for an RFP.
    ///
    /// # Errors
    /// Generation failure is an HTTP error status (e.g. the backend could
    /// not parse the model output), never a sentinel payload.
    pub async fn generate_email(&self, rfp_id: &str) -> Result<GeneratedEmail> {
        self.post_json("/rfp/generate-email", &GenerateEmailRequest { rfp_id })
            .await
    }
}
