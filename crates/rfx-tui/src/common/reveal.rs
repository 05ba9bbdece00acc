//! Incremental text reveal.
//!
//! Reveals a target string one character at a time on a fixed cadence: each
//! tick emits the next longer prefix, and a single completion event follows
//! the final tick. The preview pane uses this to "type out" a generated
//! email before it becomes editable.
//!
//! Cancellation is cooperative. The token is raced against every sleep and
//! re-checked after the sleep resolves, so a cancel that lands while a tick
//! is already due still suppresses it. Every event carries the reveal's
//! `TaskId`; the reducer drops events whose id is no longer the active
//! reveal, which also covers stale events sitting in the runtime inbox when
//! a reveal is replaced.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::task::TaskId;
use crate::events::UiEvent;

/// Runs one reveal to completion (or cancellation).
///
/// Emits `UiEvent::RevealTick` once per character of `target`, prefixes of
/// strictly increasing char length starting at 1, each preceded by one
/// `tick_interval` sleep. After the last tick, emits exactly one
/// `UiEvent::RevealFinished`.
///
/// An empty `target` is a no-op: no ticks, no completion.
///
/// `tick_interval` must be positive; callers validate it at the config
/// boundary.
pub async fn run_reveal<F>(
    id: TaskId,
    target: String,
    tick_interval: Duration,
    cancel: CancellationToken,
    emit: F,
) where
    F: Fn(UiEvent),
{
    if target.is_empty() {
        return;
    }

    // Prefix end offsets at char boundaries, so each tick slices a valid
    // prefix without re-walking the string.
    let ends: Vec<usize> = target
        .char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain([target.len()])
        .collect();

    for end in ends {
        tokio::select! {
            () = cancel.cancelled() => return,
            () = tokio::time::sleep(tick_interval) => {}
        }
        // The cancel may have landed between the sleep resolving and this
        // point; a tick must never fire after cancellation.
        if cancel.is_cancelled() {
            return;
        }
        emit(UiEvent::RevealTick {
            id,
            prefix: target[..end].to_string(),
        });
    }

    if cancel.is_cancelled() {
        return;
    }
    emit(UiEvent::RevealFinished { id });
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    const TICK: Duration = Duration::from_millis(10);

    fn spawn_reveal(
        target: &str,
        cancel: &CancellationToken,
    ) -> (
        tokio::task::JoinHandle<()>,
        mpsc::UnboundedReceiver<UiEvent>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_reveal(
            TaskId(1),
            target.to_string(),
            TICK,
            cancel.clone(),
            move |ev| {
                let _ = tx.send(ev);
            },
        ));
        (handle, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        events
    }

    fn prefixes(events: &[UiEvent]) -> Vec<String> {
        events
            .iter()
            .filter_map(|ev| match ev {
                UiEvent::RevealTick { prefix, .. } => Some(prefix.clone()),
                _ => None,
            })
            .collect()
    }

    fn finished_count(events: &[UiEvent]) -> usize {
        events
            .iter()
            .filter(|ev| matches!(ev, UiEvent::RevealFinished { .. }))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn emits_every_prefix_then_completes_once() {
        let cancel = CancellationToken::new();
        let (handle, mut rx) = spawn_reveal("Hello", &cancel);
        handle.await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(prefixes(&events), vec!["H", "He", "Hel", "Hell", "Hello"]);
        assert_eq!(finished_count(&events), 1);
        // Completion comes after the final tick.
        assert!(matches!(events.last(), Some(UiEvent::RevealFinished { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_target_is_a_no_op() {
        let cancel = CancellationToken::new();
        let (handle, mut rx) = spawn_reveal("", &cancel);
        handle.await.unwrap();

        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn two_char_target_takes_two_tick_intervals() {
        let cancel = CancellationToken::new();
        let start = tokio::time::Instant::now();
        let (handle, mut rx) = spawn_reveal("Hi", &cancel);
        handle.await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(prefixes(&events), vec!["H", "Hi"]);
        assert_eq!(finished_count(&events), 1);
        assert!(start.elapsed() >= TICK * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_first_tick_emits_nothing() {
        let cancel = CancellationToken::new();
        let (handle, mut rx) = spawn_reveal("Hello", &cancel);
        cancel.cancel();
        handle.await.unwrap();

        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_mid_reveal_stops_ticks_and_completion() {
        let cancel = CancellationToken::new();
        let (handle, mut rx) = spawn_reveal("Hello", &cancel);

        // Receive two ticks (paused time auto-advances through the sleeps),
        // then cancel while the third is pending.
        let mut events = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        cancel.cancel();
        handle.await.unwrap();

        // No further ticks, no completion - even for sleeps already pending.
        tokio::time::advance(TICK * 10).await;
        events.extend(drain(&mut rx));
        assert_eq!(prefixes(&events), vec!["H", "He"]);
        assert_eq!(finished_count(&events), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn prefixes_respect_char_boundaries() {
        let cancel = CancellationToken::new();
        let (handle, mut rx) = spawn_reveal("héllo", &cancel);
        handle.await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(prefixes(&events), vec!["h", "hé", "hél", "héll", "héllo"]);
    }
}
