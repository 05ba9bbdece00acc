//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.
//!
//! Cancellation is initiated from the reducer via `UiEffect::CancelToken`.
//! The runtime executes it by calling `token.cancel()`: the reducer decides
//! when to cancel, the runtime executes.

use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the preview.
    Quit,

    /// Load the RFP under preview.
    LoadRfp { task: TaskId },

    /// Load the vendor list used as the send target.
    LoadVendors { task: TaskId },

    /// Ask the backend to generate the email template.
    GenerateEmail { task: TaskId },

    /// Start revealing the composed email text.
    ///
    /// The reducer guarantees any previous reveal was cancelled before this
    /// is emitted; the runtime never holds two live reveals.
    StartReveal { task: TaskId, target: String },

    /// Send the (possibly edited) email to the selected vendors.
    SendEmail {
        task: TaskId,
        subject: String,
        content: String,
    },

    /// Cancel an in-progress async operation by its token.
    CancelToken { token: CancellationToken },
}
