//! Action logging with glob filtering and an in-memory ring buffer
//!
//! Every dispatched action can be recorded for display in a log overlay
//! and mirrored to `tracing`. Glob patterns select which actions are kept,
//! so high-frequency noise (selection moves, input keystrokes) can be
//! filtered out.

use std::collections::VecDeque;
use std::time::Instant;

use crate::action::ActionSummary;
use crate::store::Middleware;
use crate::Action;

/// Simple glob matching supporting `*` (any run) and `?` (one character).
pub fn glob_match(pattern: &str, text: &str) -> bool {
    fn matches(pattern: &[char], text: &[char]) -> bool {
        match pattern.split_first() {
            None => text.is_empty(),
            Some(('*', rest)) => {
                (0..=text.len()).any(|skip| matches(rest, &text[skip..]))
            }
            Some(('?', rest)) => match text.split_first() {
                Some((_, text_rest)) => matches(rest, text_rest),
                None => false,
            },
            Some((c, rest)) => match text.split_first() {
                Some((t, text_rest)) => c == t && matches(rest, text_rest),
                None => false,
            },
        }
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    matches(&pattern, &text)
}

/// Filter deciding which action names get logged.
///
/// If `include` is non-empty, a name must match at least one include
/// pattern; names matching any `exclude` pattern are dropped afterwards.
///
/// # Examples
///
/// - `Todo*` matches TodoAdd, TodoToggle
/// - `Input?????` matches InputStart but not InputChange
/// - `*Set*` matches FilterSet, SelectionSet
#[derive(Debug, Clone, Default)]
pub struct ActionFilter {
    /// If non-empty, only log actions matching these patterns
    pub include: Vec<String>,
    /// Drop actions matching these patterns (applied after include)
    pub exclude: Vec<String>,
}

impl ActionFilter {
    /// Build a filter from comma-separated pattern strings.
    ///
    /// # Example
    /// ```
    /// use tudu_core::logger::ActionFilter;
    ///
    /// let filter = ActionFilter::parse(Some("Todo*,FilterSet"), Some("SelectionSet"));
    /// assert!(filter.should_log("TodoAdd"));
    /// assert!(filter.should_log("FilterSet"));
    /// assert!(!filter.should_log("SelectionSet"));
    /// ```
    pub fn parse(include: Option<&str>, exclude: Option<&str>) -> Self {
        let split = |s: &str| -> Vec<String> {
            s.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        };
        Self {
            include: include.map(split).unwrap_or_default(),
            exclude: exclude.map(split).unwrap_or_default(),
        }
    }

    /// Check whether an action name passes the filter.
    pub fn should_log(&self, name: &str) -> bool {
        if !self.include.is_empty() && !self.include.iter().any(|p| glob_match(p, name)) {
            return false;
        }
        !self.exclude.iter().any(|p| glob_match(p, name))
    }
}

/// One recorded dispatch.
#[derive(Debug, Clone)]
pub struct ActionLogEntry {
    /// Action name (from `Action::name`)
    pub name: &'static str,
    /// Payload summary (from `ActionSummary::summary`)
    pub summary: String,
    /// When the action was recorded
    pub timestamp: Instant,
    /// Monotonic sequence number
    pub sequence: u64,
    /// Whether the reducer changed the state (filled in after dispatch)
    pub state_changed: Option<bool>,
}

impl ActionLogEntry {
    /// Format the age of this entry for display (e.g. "2.3s", "150ms").
    pub fn elapsed_display(&self) -> String {
        let elapsed = self.timestamp.elapsed();
        if elapsed.as_secs() >= 1 {
            format!("{:.1}s", elapsed.as_secs_f64())
        } else {
            format!("{}ms", elapsed.as_millis())
        }
    }
}

/// Ring buffer of recent dispatches.
///
/// Oldest entries are discarded once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct ActionLog {
    entries: VecDeque<ActionLogEntry>,
    capacity: usize,
    filter: ActionFilter,
    next_sequence: u64,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new(100, ActionFilter::default())
    }
}

impl ActionLog {
    /// Create a log with the given capacity and filter.
    pub fn new(capacity: usize, filter: ActionFilter) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            filter,
            next_sequence: 0,
        }
    }

    /// Record an action if it passes the filter.
    ///
    /// Returns `true` if an entry was stored.
    pub fn record<A: Action>(&mut self, action: &A) -> bool {
        let name = action.name();
        if !self.filter.should_log(name) {
            return false;
        }

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActionLogEntry {
            name,
            summary: action.summary(),
            timestamp: Instant::now(),
            sequence: self.next_sequence,
            state_changed: None,
        });
        self.next_sequence += 1;
        true
    }

    /// Attach the reducer outcome to the most recent entry.
    pub fn mark_last_state_changed(&mut self, changed: bool) {
        if let Some(entry) = self.entries.back_mut() {
            entry.state_changed = Some(changed);
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter()
    }

    /// The most recent `count` entries, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter().rev().take(count)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Middleware recording every dispatch into an [`ActionLog`] and mirroring
/// it to `tracing::debug!`.
#[derive(Debug, Clone)]
pub struct ActionLoggerMiddleware {
    log: ActionLog,
    last_recorded: bool,
}

impl ActionLoggerMiddleware {
    /// Create a logger with the given log configuration.
    pub fn new(log: ActionLog) -> Self {
        Self {
            log,
            last_recorded: false,
        }
    }

    /// Create a logger recording everything, with default capacity.
    pub fn record_all() -> Self {
        Self::new(ActionLog::default())
    }

    /// The recorded log.
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Mutable access to the recorded log.
    pub fn log_mut(&mut self) -> &mut ActionLog {
        &mut self.log
    }
}

impl<A: Action> Middleware<A> for ActionLoggerMiddleware {
    fn before(&mut self, action: &A) {
        self.last_recorded = self.log.record(action);
        if self.last_recorded {
            tracing::debug!(action = %action.name(), "action");
        }
    }

    fn after(&mut self, _action: &A, state_changed: bool) {
        if self.last_recorded {
            self.log.mark_last_state_changed(state_changed);
        }
    }
}
