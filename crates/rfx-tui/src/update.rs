//! Preview reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! This is where the email content lifecycle is enforced:
//!
//! - loading the RFP kicks off the first generation
//! - a successful generation cancels any live reveal, then starts a new one
//!   over the composed text
//! - a failed generation drops back to `Idle` with a notice; no reveal runs
//! - reveal completion makes the text editable
//! - an explicit regenerate works from `Idle`, `Revealing` or `Done` and
//!   always cancels the live reveal before the new request goes out
//!
//! At most one reveal is ever live. Its slot in `tasks.reveal` is cleared
//! whenever the reveal is replaced, so ticks from a cancelled reveal - even
//! ones already queued in the inbox - fail the id check and are dropped.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rfx_core::api::rfp::{self, GeneratedEmail};

use crate::common::TaskKind;
use crate::editor::Editor;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, ContentState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => match term_event {
            Event::Key(key) => handle_key(state, key),
            _ => vec![],
        },
        UiEvent::TaskStarted { kind, started } => {
            state.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = state.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(state, *completed.result)
            } else {
                // A replaced or torn-down task finishing late; its result
                // must not touch current state.
                vec![]
            }
        }
        UiEvent::RfpLoaded(result) => match result {
            Ok(loaded) => {
                state.rfp = Some(loaded);
                // Generate once on load, like opening the preview page.
                start_generation(state)
            }
            Err(error) => {
                state.notify_error(format!("Failed to load RFP: {error}"));
                vec![]
            }
        },
        UiEvent::VendorsLoaded(result) => {
            match result {
                Ok(vendors) => state.vendors = vendors,
                Err(error) => {
                    state.notify_error(format!("Failed to load vendors: {error}"));
                }
            }
            vec![]
        }
        UiEvent::EmailGenerated(result) => match result {
            Ok(email) => handle_generated(state, &email),
            Err(error) => {
                // Back to Idle; the pane shows the failed indicator and the
                // user can regenerate immediately. No automatic retry.
                state.preview.content = ContentState::Idle;
                state.preview.error = Some(error);
                state.notify_error("Failed to generate email template");
                vec![]
            }
        },
        UiEvent::EmailSent(result) => {
            match result {
                Ok(()) => state.notify_info("Email sent!"),
                Err(error) => state.notify_error(format!("Failed to send email: {error}")),
            }
            vec![]
        }
        UiEvent::RevealTick { id, prefix } => {
            // Fire-time check: only the active reveal may touch the display.
            if state.tasks.reveal.active == Some(id)
                && let ContentState::Revealing { revealed, .. } = &mut state.preview.content
            {
                *revealed = prefix;
            }
            vec![]
        }
        UiEvent::RevealFinished { id } => {
            if state.tasks.reveal.finish_if_active(id)
                && let ContentState::Revealing { revealed, .. } = &state.preview.content
            {
                // From here on the text belongs to the editor; the reveal
                // target is no longer consulted.
                state.preview.content = ContentState::Done {
                    editor: Editor::new(revealed),
                };
            }
            vec![]
        }
    }
}

// =============================================================================
// Key handling
// =============================================================================

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C quits from any state.
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if state.preview.content.is_editable() {
        return handle_editing_key(state, key, ctrl);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('r') => regenerate(state),
        _ => vec![],
    }
}

fn handle_editing_key(state: &mut AppState, key: KeyEvent, ctrl: bool) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('r') if ctrl => regenerate(state),
        KeyCode::Char('s') if ctrl => send_email(state),
        _ => {
            if let ContentState::Done { editor } = &mut state.preview.content {
                editor.input(key);
            }
            vec![]
        }
    }
}

// =============================================================================
// Content lifecycle
// =============================================================================

/// Cancels the live reveal, if any, and clears its task slot so queued
/// stale ticks are dropped at the id check.
fn cancel_active_reveal(state: &mut AppState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    let reveal = state.tasks.state_mut(TaskKind::Reveal);
    if let Some(token) = reveal.cancel.take() {
        effects.push(UiEffect::CancelToken { token });
    }
    reveal.clear();
    effects
}

/// Enters `Generating` and spawns the generate-email request.
///
/// Any live reveal is cancelled first - two reveal handles never coexist,
/// and ticks from the old one must not interleave with the next reveal.
fn start_generation(state: &mut AppState) -> Vec<UiEffect> {
    let mut effects = cancel_active_reveal(state);
    state.preview.error = None;
    state.preview.content = ContentState::Generating;
    effects.push(UiEffect::GenerateEmail {
        task: state.task_seq.next_id(),
    });
    effects
}

/// Explicit regenerate. Valid from `Idle`, `Revealing` and `Done`; ignored
/// while a generate request is already in flight.
fn regenerate(state: &mut AppState) -> Vec<UiEffect> {
    if state.preview.content.is_generating() {
        return vec![];
    }
    start_generation(state)
}

/// A generation resolved: compose the preview text and start revealing it.
fn handle_generated(state: &mut AppState, email: &GeneratedEmail) -> Vec<UiEffect> {
    let mut effects = cancel_active_reveal(state);
    state.preview.subject = Some(email.subject.clone());

    let target = rfp::compose(email);
    if target.is_empty() {
        // Nothing to reveal; an empty template is valid and goes straight
        // to an empty editable buffer.
        state.preview.content = ContentState::Done {
            editor: Editor::new(""),
        };
        return effects;
    }

    state.preview.content = ContentState::Revealing {
        target: target.clone(),
        revealed: String::new(),
    };
    effects.push(UiEffect::StartReveal {
        task: state.task_seq.next_id(),
        target,
    });
    effects
}

/// Sends the edited preview to the selected vendors.
fn send_email(state: &mut AppState) -> Vec<UiEffect> {
    if state.tasks.email_send.is_running() {
        return vec![];
    }

    if state.vendor_ids().is_empty() {
        state.notify_error("No vendors to send to");
        return vec![];
    }

    let ContentState::Done { editor } = &state.preview.content else {
        return vec![];
    };

    let subject = state
        .preview
        .subject
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            state
                .rfp
                .as_ref()
                .map(|r| format!("Request for Proposal – {}", r.title))
        })
        .unwrap_or_else(|| "Request for Proposal".to_string());

    vec![UiEffect::SendEmail {
        task: state.task_seq.next_id(),
        subject,
        content: editor.text(),
    }]
}
