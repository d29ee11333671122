//! Action traits for type-safe state transitions

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store.
///
/// Actions describe intended state changes. They should be:
/// - Clone: actions may be logged, replayed, or re-enqueued
/// - Debug: for logging and test failure output
/// - Send + 'static: for dispatch through channels
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name for logging and filtering.
    fn name(&self) -> &'static str;
}

/// One-line summary of an action, used by the action log.
///
/// The blanket implementation falls back to the `Debug` representation,
/// truncated so payload-heavy actions don't flood the log overlay.
pub trait ActionSummary {
    /// Human-readable summary of the action and its payload.
    fn summary(&self) -> String;
}

const MAX_SUMMARY_LEN: usize = 64;

impl<A: Action> ActionSummary for A {
    fn summary(&self) -> String {
        let full = format!("{self:?}");
        if full.len() <= MAX_SUMMARY_LEN {
            return full;
        }
        let cut = full
            .char_indices()
            .take_while(|(i, _)| *i < MAX_SUMMARY_LEN)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}…", &full[..cut])
    }
}
