//! Derivations of presentation data from state

use crate::state::{Todo, VisibilityFilter};

/// The todos the current filter lets through, in collection order.
///
/// Borrows from the input; `ShowAll` is every item. The match is
/// exhaustive over the filter enum, so there is no unhandled filter case.
pub fn visible_todos<'a>(todos: &'a [Todo], filter: VisibilityFilter) -> Vec<&'a Todo> {
    match filter {
        VisibilityFilter::ShowAll => todos.iter().collect(),
        VisibilityFilter::ShowActive => todos.iter().filter(|todo| !todo.completed).collect(),
        VisibilityFilter::ShowCompleted => todos.iter().filter(|todo| todo.completed).collect(),
    }
}
