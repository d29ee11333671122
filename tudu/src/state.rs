//! Application state: the todo collection, the visibility filter, and the
//! UI slice.
//!
//! State is only ever replaced, never edited in place: every dispatch
//! builds a fresh `AppState` out of the prior one.

use std::fmt;

/// Identifier of a todo item.
///
/// Ids are assigned monotonically by the action factory and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of the todo list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Create a fresh, not-yet-completed todo.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this todo with the completed flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Which todos the list shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
}

impl VisibilityFilter {
    /// Display label for the filter tabs.
    pub fn label(&self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "All",
            VisibilityFilter::ShowActive => "Active",
            VisibilityFilter::ShowCompleted => "Completed",
        }
    }

    /// All filters, in tab order.
    pub fn all() -> &'static [VisibilityFilter] {
        &[
            VisibilityFilter::ShowAll,
            VisibilityFilter::ShowActive,
            VisibilityFilter::ShowCompleted,
        ]
    }

    /// The next filter in tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            VisibilityFilter::ShowAll => VisibilityFilter::ShowActive,
            VisibilityFilter::ShowActive => VisibilityFilter::ShowCompleted,
            VisibilityFilter::ShowCompleted => VisibilityFilter::ShowAll,
        }
    }

    /// Position in tab order.
    pub fn index(self) -> usize {
        match self {
            VisibilityFilter::ShowAll => 0,
            VisibilityFilter::ShowActive => 1,
            VisibilityFilter::ShowCompleted => 2,
        }
    }
}

/// View-related state: the entry field, list selection, and overlays.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UiState {
    /// Draft text while a new todo is being entered, `None` otherwise
    pub input: Option<String>,
    /// Selected row in the visible list
    pub selected: usize,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the action log overlay is shown
    pub show_log: bool,
}

impl UiState {
    /// Whether the entry field is open.
    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }
}

/// The whole application state.
///
/// Slices are independent: each has its own reducer, and no reducer reads
/// another slice.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub visibility_filter: VisibilityFilter,
    pub ui: UiState,
}
