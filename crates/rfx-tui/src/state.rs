//! Preview application state.
//!
//! The email preview has one real state machine: [`ContentState`], the
//! lifecycle of the generated email text. It is a single tagged enum on
//! purpose - the loading/revealing/editable phases are mutually exclusive,
//! and parallel booleans would permit combinations that cannot occur.
//!
//! ```text
//! Idle -> Generating -> Revealing -> Done
//!   ^         |             |          |
//!   |         v (error)     v (regen)  v (regen)
//!   +------ Idle        Generating  Generating
//! ```

use rfx_core::api::rfp::Rfp;
use rfx_core::api::vendor::Vendor;
use rfx_core::config::Config;

use crate::common::{TaskSeq, Tasks};
use crate::editor::Editor;

/// Lifecycle of the previewed email content.
#[derive(Debug, Default)]
pub enum ContentState {
    /// Nothing generated yet, or the last generation failed.
    #[default]
    Idle,

    /// The generate-email request is in flight.
    Generating,

    /// A reveal is typing out the composed text.
    Revealing {
        /// The full composed string being revealed.
        target: String,
        /// The prefix revealed so far.
        revealed: String,
    },

    /// Reveal complete; the text is editable and decoupled from the
    /// reveal target - edits never feed back.
    Done { editor: Editor },
}

impl ContentState {
    /// Returns true while the generate request is in flight.
    pub fn is_generating(&self) -> bool {
        matches!(self, ContentState::Generating)
    }

    /// Returns true once the preview is editable.
    pub fn is_editable(&self) -> bool {
        matches!(self, ContentState::Done { .. })
    }
}

/// Email preview pane state.
#[derive(Debug, Default)]
pub struct PreviewState {
    pub content: ContentState,

    /// Subject line of the last generated email, kept for the send payload.
    pub subject: Option<String>,

    /// Last generation failure; rendered as the pane's neutral failed
    /// indicator until the next regenerate.
    pub error: Option<String>,
}

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient status message (the toast equivalent).
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

/// Top-level state for the preview TUI.
pub struct AppState {
    /// Flag indicating the preview should quit.
    pub should_quit: bool,
    /// Loaded configuration.
    pub config: Config,
    /// Id of the RFP under preview.
    pub rfp_id: String,
    /// The loaded RFP, once available.
    pub rfp: Option<Rfp>,
    /// Vendors available as send targets.
    pub vendors: Vec<Vendor>,
    /// Explicit vendor ids from the command line; when non-empty these
    /// override the loaded vendor list as the send target.
    pub vendor_filter: Vec<String>,
    /// Email preview pane state.
    pub preview: PreviewState,
    /// Transient notice shown in the status line.
    pub notice: Option<Notice>,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates the initial state for previewing one RFP.
    pub fn new(config: Config, rfp_id: String, vendor_filter: Vec<String>) -> Self {
        Self {
            should_quit: false,
            config,
            rfp_id,
            rfp: None,
            vendors: Vec::new(),
            vendor_filter,
            preview: PreviewState::default(),
            notice: None,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }

    /// Returns the vendor ids the email would be sent to.
    pub fn vendor_ids(&self) -> Vec<String> {
        if self.vendor_filter.is_empty() {
            self.vendors.iter().map(|v| v.id.clone()).collect()
        } else {
            self.vendor_filter.clone()
        }
    }

    /// Posts an informational notice.
    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            level: NoticeLevel::Info,
        });
    }

    /// Posts an error notice.
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            level: NoticeLevel::Error,
        });
    }
}
