//! Key-to-command bindings and command-to-action mapping
//!
//! Keys resolve to named commands through the keymap (so users can rebind
//! them in a config file), and commands resolve to actions here. List
//! navigation is not in the keymap; the checklist component handles it.

use std::fs;
use std::io;
use std::path::Path;

use tudu_core::{BindingContext, Keymap};

use crate::action::{Action, ActionFactory};
use crate::selector::visible_todos;
use crate::state::{AppState, VisibilityFilter};

/// Keybinding contexts of the app.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Context {
    /// Browsing the todo list
    List,
    /// Entering a new todo
    Input,
}

impl BindingContext for Context {
    fn name(&self) -> &'static str {
        match self {
            Context::List => "list",
            Context::Input => "input",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "list" => Some(Context::List),
            "input" => Some(Context::Input),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[Context::List, Context::Input]
    }
}

/// The context matching the current state.
pub fn context_for(state: &AppState) -> Context {
    if state.ui.is_editing() {
        Context::Input
    } else {
        Context::List
    }
}

/// Built-in bindings, overridable per command from a config file.
pub fn default_keymap() -> Keymap<Context> {
    let mut keymap = Keymap::new();

    keymap.bind("quit", &["ctrl+c"]);

    keymap.bind_in(Context::List, "quit", &["q", "esc"]);
    keymap.bind_in(Context::List, "todo.new", &["a", "i"]);
    keymap.bind_in(Context::List, "todo.toggle", &["space", "enter"]);
    keymap.bind_in(Context::List, "filter.cycle", &["f", "tab"]);
    keymap.bind_in(Context::List, "filter.all", &["1"]);
    keymap.bind_in(Context::List, "filter.active", &["2"]);
    keymap.bind_in(Context::List, "filter.completed", &["3"]);
    keymap.bind_in(Context::List, "help.toggle", &["?"]);
    keymap.bind_in(Context::List, "log.toggle", &["l"]);

    keymap.bind_in(Context::Input, "input.cancel", &["esc"]);

    keymap
}

/// Load user bindings from a JSON file and overlay them on the defaults.
pub fn load_keymap(path: &Path) -> io::Result<Keymap<Context>> {
    let raw = fs::read_to_string(path)?;
    let user: Keymap<Context> = serde_json::from_str(&raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Keymap::merge(default_keymap(), user))
}

/// Turn a resolved command into an action.
///
/// This is where the view layer consults the selector and the action
/// factory: toggling targets the id of the currently selected visible
/// todo, and filter cycling starts from the current filter.
pub fn command_to_action(
    command: &str,
    state: &AppState,
    factory: &ActionFactory,
) -> Option<Action> {
    match command {
        "quit" => Some(Action::Quit),
        "todo.new" => Some(Action::InputStart),
        "todo.toggle" => {
            let visible = visible_todos(&state.todos, state.visibility_filter);
            visible
                .get(state.ui.selected)
                .map(|todo| factory.toggle_todo(todo.id))
        }
        "filter.cycle" => Some(factory.set_visibility_filter(state.visibility_filter.next())),
        "filter.all" => Some(factory.set_visibility_filter(VisibilityFilter::ShowAll)),
        "filter.active" => Some(factory.set_visibility_filter(VisibilityFilter::ShowActive)),
        "filter.completed" => Some(factory.set_visibility_filter(VisibilityFilter::ShowCompleted)),
        "help.toggle" => Some(Action::HelpToggle),
        "log.toggle" => Some(Action::LogToggle),
        "input.cancel" => Some(Action::InputCancel),
        other => {
            tracing::warn!(command = %other, "Unknown keymap command");
            None
        }
    }
}
