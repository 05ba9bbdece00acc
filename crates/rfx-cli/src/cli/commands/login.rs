//! Session command handlers.
//!
//! "Login" validates a user id against the backend and stores it locally;
//! there is no credential check.

use anyhow::{Context, Result};
use rfx_core::api::ApiClient;
use rfx_core::session::Session;

pub async fn login(api: &ApiClient, user_id: &str) -> Result<()> {
    let user = api
        .get_user(user_id)
        .await
        .with_context(|| format!("Invalid user id '{user_id}'"))?;

    let session = Session {
        user_id: user.id,
        name: user.name,
        email: user.email,
    };
    session.save()?;

    println!("Logged in as {} <{}>", session.name, session.email);
    Ok(())
}

pub fn logout() -> Result<()> {
    Session::clear()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami() -> Result<()> {
    let session = Session::load()?;
    println!(
        "{} <{}> ({})",
        session.name, session.email, session.user_id
    );
    Ok(())
}
