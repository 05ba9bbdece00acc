//! Effect handler implementations.
//!
//! Pure async functions that perform one backend call and return the event
//! describing its outcome. The runtime handles spawning and delivery; the
//! reducer handles the result. Errors are stringified here so the reducer
//! never sees a raw error type.

use rfx_core::api::ApiClient;
use rfx_core::api::email::SendEmailRequest;
use rfx_core::api::vendor::VendorQuery;
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

/// Loads the RFP under preview.
pub async fn rfp_load(api: ApiClient, rfp_id: String) -> UiEvent {
    let result = api.get_rfp(&rfp_id).await.map_err(|e| format!("{e:#}"));
    UiEvent::RfpLoaded(result)
}

/// Loads the vendor list used as the send target.
pub async fn vendor_list(api: ApiClient, limit: u32) -> UiEvent {
    let query = VendorQuery {
        skip: 0,
        limit,
        search: String::new(),
    };
    let result = api
        .list_vendors(&query)
        .await
        .map_err(|e| format!("{e:#}"));
    UiEvent::VendorsLoaded(result)
}

/// Requests a generated email template, racing the cancellation token.
///
/// Cancellation happens on teardown only; the discarded completion is
/// additionally ignored by the reducer's task-id check.
pub async fn email_generate(
    api: ApiClient,
    rfp_id: String,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let cancel = cancel.unwrap_or_default();
    let result = tokio::select! {
        () = cancel.cancelled() => Err("Generation cancelled".to_string()),
        result = api.generate_email(&rfp_id) => result.map_err(|e| format!("{e:#}")),
    };
    UiEvent::EmailGenerated(result)
}

/// Sends the email to the selected vendors.
pub async fn email_send(api: ApiClient, request: SendEmailRequest) -> UiEvent {
    let result = api
        .send_email(&request)
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:#}"));
    UiEvent::EmailSent(result)
}
