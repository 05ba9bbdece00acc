//! Shared fixture helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::json;

/// Builds a backend user payload.
pub fn user_json(id: &str, name: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": email
    })
}

/// Builds a backend RFP payload (prisma-style camelCase).
pub fn rfp_json(id: &str, user_id: &str, title: &str, description: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": user_id,
        "title": title,
        "description": description,
        "structuredRequirements": {
            "budget": 50000,
            "items": ["laptops"]
        }
    })
}

/// Builds a backend vendor payload.
pub fn vendor_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{name}@example.com").to_lowercase(),
        "phone": null
    })
}

/// Builds a generated email template payload.
pub fn generated_email_json(subject: &str, content: &str, footer: &str) -> serde_json::Value {
    json!({
        "subject": subject,
        "content": content,
        "footer": footer
    })
}

/// Writes a stored session into the given RFX_HOME directory.
pub fn write_session(home: &Path, user_id: &str, name: &str, email: &str) {
    fs::create_dir_all(home).unwrap();
    fs::write(
        home.join("session.toml"),
        format!("user_id = \"{user_id}\"\nname = \"{name}\"\nemail = \"{email}\"\n"),
    )
    .unwrap();
}
