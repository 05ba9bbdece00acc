//! Vendor endpoints.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::ApiClient;

/// A supplier that can receive RFPs and submit proposals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Pagination and search parameters for the vendor listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VendorQuery {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

#[derive(Debug, Serialize)]
struct AddVendorRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
}

#[derive(Debug, Default, Serialize)]
pub struct VendorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ApiClient {
    /// Lists vendors with pagination and optional search.
    pub async fn list_vendors(&self, query: &VendorQuery) -> Result<Vec<Vendor>> {
        self.get_json_with_query("/vendor/", query).await
    }

    /// Registers a new vendor.
    pub async fn add_vendor(
        &self,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Vendor> {
        self.post_json("/vendor/add", &AddVendorRequest { name, email, phone })
            .await
    }

    /// Updates an existing vendor.
    pub async fn update_vendor(&self, id: &str, update: &VendorUpdate) -> Result<Vendor> {
        self.put_json(&format!("/vendor/{id}"), update).await
    }

    /// Deletes a vendor.
    pub async fn delete_vendor(&self, id: &str) -> Result<serde_json::Value> {
        self.delete_json(&format!("/vendor/{id}")).await
    }
}
