//! Non-interactive send command.
//!
//! Sends an RFP email either from explicit subject/content flags or from a
//! freshly generated template. The interactive preview (`rfx preview`) is
//! the richer path; this one suits scripts and tests.

use anyhow::{Context, Result, bail};
use rfx_core::api::ApiClient;
use rfx_core::api::email::SendEmailRequest;
use rfx_core::api::vendor::VendorQuery;

/// How many vendors to fetch when none were named explicitly.
const VENDOR_FETCH_LIMIT: u32 = 100;

pub struct SendOptions {
    pub rfp_id: String,
    pub vendor_ids: Vec<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
    pub generate: bool,
}

pub async fn run(api: &ApiClient, options: SendOptions) -> Result<()> {
    let (subject, content) = if options.generate {
        let email = api
            .generate_email(&options.rfp_id)
            .await
            .context("generate email template")?;
        (
            email.subject.clone(),
            format!("{}\n\n{}", email.content, email.footer),
        )
    } else {
        let subject = options
            .subject
            .context("--subject is required unless --generate is set")?;
        let content = options
            .content
            .context("--content is required unless --generate is set")?;
        (subject, content)
    };

    let vendor_ids = if options.vendor_ids.is_empty() {
        let query = VendorQuery {
            skip: 0,
            limit: VENDOR_FETCH_LIMIT,
            search: String::new(),
        };
        api.list_vendors(&query)
            .await
            .context("list vendors")?
            .into_iter()
            .map(|v| v.id)
            .collect()
    } else {
        options.vendor_ids
    };

    if vendor_ids.is_empty() {
        bail!("No vendors to send to");
    }

    let count = vendor_ids.len();
    let request = SendEmailRequest {
        rfp_id: options.rfp_id,
        vendor_ids,
        subject,
        content,
    };
    api.send_email(&request).await.context("send email")?;

    println!("Email sent to {count} vendor(s).");
    Ok(())
}
