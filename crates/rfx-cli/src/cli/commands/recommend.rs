//! Recommendation command handler.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table, presets};
use rfx_core::api::ApiClient;

pub async fn run(api: &ApiClient, rfp_id: &str) -> Result<()> {
    let recommendation = api
        .get_recommendation(rfp_id)
        .await
        .with_context(|| format!("load recommendation for RFP '{rfp_id}'"))?;

    println!("{}\n", recommendation.comparison_summary);

    if recommendation.vendors_ranked.is_empty() {
        println!("No proposals to rank.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header([
            "Vendor", "Score", "Price", "Delivery", "Warranty", "Payment", "Coverage", "Notes",
        ]);
    for ranking in &recommendation.vendors_ranked {
        let price = match &ranking.price_total {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        table.add_row([
            ranking.vendor_name.clone(),
            format!("{:.1}", ranking.score),
            price,
            ranking.delivery_match.clone(),
            ranking.warranty_match.clone(),
            ranking.payment_terms_match.clone(),
            format!("{:.1}", ranking.item_coverage_score),
            ranking.notes.clone(),
        ]);
    }
    println!("{table}");
    println!("\nRecommended vendor: {}", recommendation.recommended_vendor);
    Ok(())
}
