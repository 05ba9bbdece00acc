//! RFP command handlers.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table, presets};
use rfx_core::api::ApiClient;
use rfx_core::session::Session;

/// Max description characters shown in the listing.
const DESCRIPTION_PREVIEW_CHARS: usize = 40;

pub async fn list(api: &ApiClient) -> Result<()> {
    let session = Session::load()?;
    let rfps = api
        .list_rfps(&session.user_id)
        .await
        .context("list RFPs")?;

    if rfps.is_empty() {
        println!("No RFPs found.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "Title", "Description"]);
    for rfp in rfps {
        let preview: String = rfp.description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        let preview = if rfp.description.chars().count() > DESCRIPTION_PREVIEW_CHARS {
            format!("{preview}...")
        } else {
            preview
        };
        table.add_row([rfp.id, rfp.title, preview]);
    }
    println!("{table}");
    Ok(())
}

pub async fn show(api: &ApiClient, id: &str) -> Result<()> {
    let rfp = api
        .get_rfp(id)
        .await
        .with_context(|| format!("load RFP '{id}'"))?;

    println!("{}", rfp.title);
    if !rfp.description.is_empty() {
        println!("\n{}", rfp.description);
    }
    println!("\nStructured Requirements:");
    println!(
        "{}",
        serde_json::to_string_pretty(&rfp.structured_requirements)
            .unwrap_or_else(|_| "{}".to_string())
    );
    Ok(())
}

pub async fn create(api: &ApiClient, text: &str) -> Result<()> {
    let session = Session::load()?;
    let rfp = api
        .create_rfp(text, &session.user_id)
        .await
        .context("create RFP")?;
    println!("Created RFP {} ({})", rfp.id, rfp.title);
    Ok(())
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<()> {
    api.delete_rfp(id)
        .await
        .with_context(|| format!("delete RFP '{id}'"))?;
    println!("RFP deleted");
    Ok(())
}
