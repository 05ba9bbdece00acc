//! UI events consumed by the reducer.
//!
//! Events arrive from three sources: the terminal (key presses), the frame
//! clock (`Tick`), and the runtime inbox (results of spawned async work,
//! reveal ticks included). The reducer is the only consumer.

use rfx_core::api::rfp::{GeneratedEmail, Rfp};
use rfx_core::api::vendor::Vendor;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Frame tick; advances the spinner and caps render cadence.
    Tick,

    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// An async task was spawned; carries its cancellation token.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// An async task finished; the inner event is re-dispatched only if the
    /// task is still the active one of its kind.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// The RFP under preview finished loading.
    RfpLoaded(Result<Rfp, String>),

    /// The vendor list for the send target finished loading.
    VendorsLoaded(Result<Vec<Vendor>, String>),

    /// The generate-email request resolved.
    EmailGenerated(Result<GeneratedEmail, String>),

    /// The send-email request resolved.
    EmailSent(Result<(), String>),

    /// One reveal tick: the next longer prefix of the reveal target.
    ///
    /// Carries the reveal's id; ticks from a replaced reveal are dropped by
    /// the reducer even if they were already queued in the inbox.
    RevealTick { id: TaskId, prefix: String },

    /// The reveal emitted its final prefix.
    RevealFinished { id: TaskId },
}
