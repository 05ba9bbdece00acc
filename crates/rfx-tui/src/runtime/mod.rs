//! Preview runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async results arrive through a single "inbox" channel:
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//!
//! Reveal ticks travel the same channel. Because the inbox is FIFO, a
//! reveal's `TaskStarted` always precedes its ticks, and ticks of a
//! replaced reveal are dropped by the reducer's id check even when they
//! were queued before the cancellation landed.

mod handlers;

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use rfx_core::api::ApiClient;
use rfx_core::api::email::SendEmailRequest;
use rfx_core::config::Config;
use rfx_core::interrupt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted, run_reveal};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate while async work is in flight (~60fps).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// How many vendors to fetch as the default send target.
const VENDOR_FETCH_LIMIT: u32 = 100;

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen preview runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop, panic, or Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: ApiClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new preview runtime for one RFP.
    pub fn new(config: Config, rfp_id: String, vendor_filter: Vec<String>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let api = ApiClient::new(&config)?;
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(config, rfp_id, vendor_filter);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            api,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        // Kick off the initial loads; everything else flows through events.
        let rfp_task = self.state.task_seq.next_id();
        let vendor_task = self.state.task_seq.next_id();
        self.execute_effect(UiEffect::LoadRfp { task: rfp_task });
        self.execute_effect(UiEffect::LoadVendors { task: vendor_task });

        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            if interrupt::is_interrupted() {
                self.execute_effect(UiEffect::Quit);
                break;
            }

            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - this caps frame rate at tick
                // cadence; other events update state and batch renders.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the terminal and the inbox.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while anything async is running (reveal ticks,
        // backend requests); slow polling otherwise to save CPU.
        let tick_interval = if self.state.tasks.is_any_running() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events:
        // - If we already have events to process, do a non-blocking poll
        // - Otherwise, block until the next tick is due
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted
    /// lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Spawns a reveal. Ticks and completion stream straight to the inbox;
    /// a cancelled reveal simply stops sending.
    fn spawn_reveal(&self, id: TaskId, target: String) {
        let tx = self.inbox_tx.clone();
        let cancel = CancellationToken::new();
        let started = TaskStarted {
            id,
            cancel: Some(cancel.clone()),
        };
        let _ = tx.send(UiEvent::TaskStarted {
            kind: TaskKind::Reveal,
            started,
        });

        let interval = self.state.config.reveal_interval();
        tokio::spawn(run_reveal(id, target, interval, cancel, move |ev| {
            let _ = tx.send(ev);
        }));
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
                // No spawned task outlives the view.
                self.state.tasks.cancel_all();
            }

            UiEffect::CancelToken { token } => {
                token.cancel();
            }

            UiEffect::LoadRfp { task } => {
                let api = self.api.clone();
                let rfp_id = self.state.rfp_id.clone();
                self.spawn_task(TaskKind::RfpLoad, task, false, move |_| {
                    handlers::rfp_load(api, rfp_id)
                });
            }

            UiEffect::LoadVendors { task } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::VendorList, task, false, move |_| {
                    handlers::vendor_list(api, VENDOR_FETCH_LIMIT)
                });
            }

            UiEffect::GenerateEmail { task } => {
                let api = self.api.clone();
                let rfp_id = self.state.rfp_id.clone();
                tracing::debug!(%rfp_id, "requesting email template");
                self.spawn_task(TaskKind::EmailGenerate, task, true, move |cancel| {
                    handlers::email_generate(api, rfp_id, cancel)
                });
            }

            UiEffect::StartReveal { task, target } => {
                tracing::debug!(chars = target.chars().count(), "starting reveal");
                self.spawn_reveal(task, target);
            }

            UiEffect::SendEmail {
                task,
                subject,
                content,
            } => {
                let api = self.api.clone();
                let request = SendEmailRequest {
                    rfp_id: self.state.rfp_id.clone(),
                    vendor_ids: self.state.vendor_ids(),
                    subject,
                    content,
                };
                self.spawn_task(TaskKind::EmailSend, task, false, move |_| {
                    handlers::email_send(api, request)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
