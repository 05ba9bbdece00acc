//! Full-screen email preview TUI for RFX.
//!
//! Previews the AI-generated email for one RFP: the composed template is
//! typed out character by character, can be regenerated at any point, and
//! becomes editable once fully revealed. Sending goes to the vendors given
//! on the command line, or to every registered vendor.

pub mod common;
pub mod editor;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use rfx_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive email preview for one RFP.
///
/// # Errors
/// Returns an error if stderr is not a terminal or terminal setup fails.
pub fn run_preview(config: Config, rfp_id: String, vendor_ids: Vec<String>) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The preview requires a terminal.\n\
             Use `rfx send --generate` for non-interactive sending."
        );
    }

    let mut runtime = TuiRuntime::new(config, rfp_id, vendor_ids)?;
    runtime.run()
}
