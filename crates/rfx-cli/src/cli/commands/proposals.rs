//! Proposal command handlers.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table, presets};
use rfx_core::api::ApiClient;
use rfx_core::api::proposal::Proposal;

/// Max raw-text characters shown in the listing.
const RAW_TEXT_PREVIEW_CHARS: usize = 60;

pub async fn list(api: &ApiClient, rfp_vendor: Option<&str>) -> Result<()> {
    let proposals = match rfp_vendor {
        Some(id) => api
            .list_vendor_proposals(id)
            .await
            .with_context(|| format!("list proposals for '{id}'"))?,
        None => api.list_proposals().await.context("list proposals")?,
    };

    if proposals.is_empty() {
        println!("No proposals found.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "RFP-Vendor", "Text"]);
    for proposal in proposals {
        table.add_row([
            proposal.id.clone(),
            proposal.rfp_vendor_id.clone(),
            text_preview(&proposal),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn text_preview(proposal: &Proposal) -> String {
    let flat = proposal.raw_text.replace('\n', " ");
    let preview: String = flat.chars().take(RAW_TEXT_PREVIEW_CHARS).collect();
    if flat.chars().count() > RAW_TEXT_PREVIEW_CHARS {
        format!("{preview}...")
    } else {
        preview
    }
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<()> {
    api.delete_proposal(id)
        .await
        .with_context(|| format!("delete proposal '{id}'"))?;
    println!("Proposal deleted");
    Ok(())
}

pub async fn purge(api: &ApiClient, rfp_vendor_id: &str) -> Result<()> {
    let deleted = api
        .delete_vendor_proposals(rfp_vendor_id)
        .await
        .with_context(|| format!("purge proposals for '{rfp_vendor_id}'"))?;
    println!("Deleted {} proposal(s)", deleted.deleted_count);
    Ok(())
}
