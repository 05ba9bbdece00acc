//! Vendor command handlers.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table, presets};
use rfx_core::api::ApiClient;
use rfx_core::api::vendor::{VendorQuery, VendorUpdate};
use rfx_core::config::Config;

pub async fn list(api: &ApiClient, config: &Config, page: u32, search: &str) -> Result<()> {
    let query = VendorQuery {
        skip: page * config.page_size,
        limit: config.page_size,
        search: search.to_string(),
    };
    let vendors = api.list_vendors(&query).await.context("list vendors")?;

    if vendors.is_empty() {
        println!("No vendors found.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "Name", "Email", "Phone"]);
    for vendor in vendors {
        table.add_row([
            vendor.id,
            vendor.name,
            vendor.email.unwrap_or_default(),
            vendor.phone.unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn add(
    api: &ApiClient,
    name: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<()> {
    let vendor = api
        .add_vendor(name, email, phone)
        .await
        .context("add vendor")?;
    println!("Added vendor {} ({})", vendor.name, vendor.id);
    Ok(())
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let update = VendorUpdate { name, email, phone };
    let vendor = api
        .update_vendor(id, &update)
        .await
        .with_context(|| format!("update vendor '{id}'"))?;
    println!("Updated vendor {}", vendor.id);
    Ok(())
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<()> {
    api.delete_vendor(id)
        .await
        .with_context(|| format!("delete vendor '{id}'"))?;
    println!("Vendor deleted");
    Ok(())
}
