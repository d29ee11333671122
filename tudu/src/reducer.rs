//! Pure reducers over the application state
//!
//! Each slice of [`AppState`] has its own reducer; [`todo_app`] composes
//! them statically. Reducers never mutate their input and treat unknown
//! actions as identity.

use crate::action::Action;
use crate::state::{AppState, Todo, UiState, VisibilityFilter};

/// Compose the slice reducers into one reducer over the whole state.
///
/// Every sub-reducer gets its own prior slice and the same action; none of
/// them sees another slice. The struct literal keeps the slice-to-reducer
/// wiring checked at compile time.
pub fn todo_app(state: &AppState, action: &Action) -> AppState {
    AppState {
        todos: todos(&state.todos, action),
        visibility_filter: visibility_filter(state.visibility_filter, action),
        ui: ui(&state.ui, action),
    }
}

/// Reducer for a single todo.
///
/// `prior` is `None` only when an item is being created; toggles of a
/// non-matching id hand the item back unchanged.
fn todo(prior: Option<&Todo>, action: &Action) -> Option<Todo> {
    match action {
        Action::TodoAdd { id, text } => Some(Todo::new(*id, text.clone())),
        Action::TodoToggle { id } => prior.map(|item| {
            if item.id == *id {
                item.toggled()
            } else {
                item.clone()
            }
        }),
        _ => prior.cloned(),
    }
}

/// Reducer for the todo collection.
///
/// Adds always append at the end; toggles keep length and order.
pub fn todos(prior: &[Todo], action: &Action) -> Vec<Todo> {
    match action {
        Action::TodoAdd { .. } => {
            let mut next = prior.to_vec();
            next.extend(todo(None, action));
            next
        }
        Action::TodoToggle { .. } => prior
            .iter()
            .filter_map(|item| todo(Some(item), action))
            .collect(),
        _ => prior.to_vec(),
    }
}

/// Reducer for the visibility filter.
///
/// The new filter is taken verbatim; everything else keeps the prior one.
pub fn visibility_filter(prior: VisibilityFilter, action: &Action) -> VisibilityFilter {
    match action {
        Action::FilterSet(filter) => *filter,
        _ => prior,
    }
}

/// Reducer for the UI slice.
///
/// Selection indices arrive pre-clamped from the list component, so this
/// reducer stays independent of the todos slice.
pub fn ui(prior: &UiState, action: &Action) -> UiState {
    match action {
        Action::InputStart => UiState {
            input: Some(String::new()),
            ..prior.clone()
        },
        Action::InputChange(text) if prior.is_editing() => UiState {
            input: Some(text.clone()),
            ..prior.clone()
        },
        Action::InputSubmit(_) | Action::InputCancel => UiState {
            input: None,
            ..prior.clone()
        },
        Action::SelectionSet(index) => UiState {
            selected: *index,
            ..prior.clone()
        },
        Action::FilterSet(_) => UiState {
            // The visible list changes shape, so restart from its top.
            selected: 0,
            ..prior.clone()
        },
        Action::HelpToggle => UiState {
            show_help: !prior.show_help,
            ..prior.clone()
        },
        Action::LogToggle => UiState {
            show_log: !prior.show_log,
            ..prior.clone()
        },
        _ => prior.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TodoId;

    fn add(id: u64, text: &str) -> Action {
        Action::TodoAdd {
            id: TodoId(id),
            text: text.into(),
        }
    }

    fn toggle(id: u64) -> Action {
        Action::TodoToggle { id: TodoId(id) }
    }

    #[test]
    fn test_add_appends_new_item() {
        let prior = vec![Todo::new(TodoId(0), "first")];
        let next = todos(&prior, &add(1, "second"));

        assert_eq!(next.len(), prior.len() + 1);
        assert_eq!(next[0], prior[0]);
        assert_eq!(next[1], Todo::new(TodoId(1), "second"));
        assert!(!next[1].completed);
    }

    #[test]
    fn test_add_to_empty() {
        let next = todos(&[], &add(0, "first"));
        assert_eq!(next, vec![Todo::new(TodoId(0), "first")]);
    }

    #[test]
    fn test_toggle_flips_only_matching_id() {
        let prior = vec![Todo::new(TodoId(0), "a"), Todo::new(TodoId(1), "b")];
        let next = todos(&prior, &toggle(1));

        assert_eq!(next.len(), prior.len());
        assert!(!next[0].completed);
        assert!(next[1].completed);
        assert_eq!(next[0], prior[0]);
    }

    #[test]
    fn test_toggle_unknown_id_is_identity() {
        let prior = vec![Todo::new(TodoId(0), "a")];
        let next = todos(&prior, &toggle(42));
        assert_eq!(next, prior);
    }

    #[test]
    fn test_toggle_twice_restores_collection() {
        let prior = vec![Todo::new(TodoId(0), "a"), Todo::new(TodoId(1), "b")];
        let once = todos(&prior, &toggle(0));
        let twice = todos(&once, &toggle(0));
        assert_eq!(twice, prior);
    }

    #[test]
    fn test_toggle_preserves_order() {
        let prior = vec![
            Todo::new(TodoId(0), "a"),
            Todo::new(TodoId(1), "b"),
            Todo::new(TodoId(2), "c"),
        ];
        let next = todos(&prior, &toggle(1));
        let ids: Vec<_> = next.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TodoId(0), TodoId(1), TodoId(2)]);
    }

    #[test]
    fn test_unrelated_action_is_identity_on_todos() {
        let prior = vec![Todo::new(TodoId(0), "a")];
        let next = todos(&prior, &Action::HelpToggle);
        assert_eq!(next, prior);
    }

    #[test]
    fn test_filter_set_takes_value_verbatim() {
        let next = visibility_filter(
            VisibilityFilter::ShowAll,
            &Action::FilterSet(VisibilityFilter::ShowCompleted),
        );
        assert_eq!(next, VisibilityFilter::ShowCompleted);
    }

    #[test]
    fn test_filter_ignores_other_actions() {
        let next = visibility_filter(VisibilityFilter::ShowActive, &add(0, "x"));
        assert_eq!(next, VisibilityFilter::ShowActive);
    }

    #[test]
    fn test_ui_entry_lifecycle() {
        let start = ui(&UiState::default(), &Action::InputStart);
        assert_eq!(start.input.as_deref(), Some(""));

        let typed = ui(&start, &Action::InputChange("buy mil".into()));
        assert_eq!(typed.input.as_deref(), Some("buy mil"));

        let submitted = ui(&typed, &Action::InputSubmit("buy milk".into()));
        assert!(!submitted.is_editing());

        let cancelled = ui(&typed, &Action::InputCancel);
        assert!(!cancelled.is_editing());
    }

    #[test]
    fn test_ui_ignores_change_when_not_editing() {
        let next = ui(&UiState::default(), &Action::InputChange("stray".into()));
        assert!(!next.is_editing());
    }

    #[test]
    fn test_ui_selection_and_overlays() {
        let selected = ui(&UiState::default(), &Action::SelectionSet(4));
        assert_eq!(selected.selected, 4);

        let reset = ui(&selected, &Action::FilterSet(VisibilityFilter::ShowActive));
        assert_eq!(reset.selected, 0);

        let help = ui(&UiState::default(), &Action::HelpToggle);
        assert!(help.show_help);
        assert!(!ui(&help, &Action::HelpToggle).show_help);
    }

    #[test]
    fn test_composition_slices_are_independent() {
        let state = AppState {
            todos: vec![Todo::new(TodoId(0), "a")],
            visibility_filter: VisibilityFilter::ShowActive,
            ui: UiState::default(),
        };

        // A todos action leaves the filter slice alone, and vice versa.
        let after_add = todo_app(&state, &add(1, "b"));
        assert_eq!(after_add.visibility_filter, state.visibility_filter);

        let after_filter = todo_app(&state, &Action::FilterSet(VisibilityFilter::ShowAll));
        assert_eq!(after_filter.todos, state.todos);
    }

    #[test]
    fn test_composition_does_not_mutate_prior_state() {
        let state = AppState {
            todos: vec![Todo::new(TodoId(0), "a")],
            visibility_filter: VisibilityFilter::ShowAll,
            ui: UiState::default(),
        };
        let snapshot = state.clone();

        let _ = todo_app(&state, &add(1, "b"));
        let _ = todo_app(&state, &toggle(0));
        let _ = todo_app(&state, &Action::FilterSet(VisibilityFilter::ShowCompleted));

        assert_eq!(state, snapshot);
    }
}
