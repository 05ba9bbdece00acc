//! User endpoints.
//!
//! There is no credential check behind these; a "login" is a lookup of an
//! existing user id.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::ApiClient;

/// A staff user who owns RFPs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
struct CreateUserRequest<'a> {
    email: &'a str,
    name: &'a str,
}

impl ApiClient {
    /// Fetches a user by id.
    pub async fn get_user(&self, id: &str) -> Result<User> {
        self.get_json(&format!("/user/{id}")).await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get_json("/user/all").await
    }

    /// Creates a user.
    pub async fn create_user(&self, email: &str, name: &str) -> Result<User> {
        self.post_json("/user/create", &CreateUserRequest { email, name })
            .await
    }
}
