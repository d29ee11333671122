//! Actions and the factory that constructs them

use crate::state::{TodoId, VisibilityFilter};

/// Everything that can happen in the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // Todos
    TodoAdd { id: TodoId, text: String },
    TodoToggle { id: TodoId },

    // Filter
    FilterSet(VisibilityFilter),

    // Entry field
    InputStart,
    InputChange(String),
    InputSubmit(String),
    InputCancel,

    // List
    SelectionSet(usize),

    // Overlays
    HelpToggle,
    LogToggle,

    // Global
    Quit,
}

impl tudu_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::TodoAdd { .. } => "TodoAdd",
            Action::TodoToggle { .. } => "TodoToggle",
            Action::FilterSet(_) => "FilterSet",
            Action::InputStart => "InputStart",
            Action::InputChange(_) => "InputChange",
            Action::InputSubmit(_) => "InputSubmit",
            Action::InputCancel => "InputCancel",
            Action::SelectionSet(_) => "SelectionSet",
            Action::HelpToggle => "HelpToggle",
            Action::LogToggle => "LogToggle",
            Action::Quit => "Quit",
        }
    }
}

/// Constructs well-formed actions.
///
/// The factory owns the id counter for new todos: ids start at 0, grow by
/// one per created todo, and are never reused or reset. Whoever drives the
/// event loop owns the factory, so there is no hidden global counter.
#[derive(Debug, Default)]
pub struct ActionFactory {
    next_id: u64,
}

impl ActionFactory {
    /// Create a factory whose first todo gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Action adding a new todo with the next id.
    pub fn add_todo(&mut self, text: impl Into<String>) -> Action {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        Action::TodoAdd {
            id,
            text: text.into(),
        }
    }

    /// Action toggling the completed flag of a todo.
    pub fn toggle_todo(&self, id: TodoId) -> Action {
        Action::TodoToggle { id }
    }

    /// Action switching the visibility filter.
    pub fn set_visibility_filter(&self, filter: VisibilityFilter) -> Action {
        Action::FilterSet(filter)
    }
}
