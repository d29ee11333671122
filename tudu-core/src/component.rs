//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component that renders from props and emits actions.
///
/// Components follow three rules:
/// 1. Props carry ALL read-only data needed for rendering
/// 2. `handle_event` returns actions, it never mutates external state
/// 3. `render` is a function of props (plus internal view state such as a
///    scroll offset)
///
/// Internal view state (scroll position, cursor column) may live in
/// `&mut self`; data mutations must go through actions dispatched to the
/// store. Focus is passed through props, which keeps components decoupled
/// from how the application tracks it.
pub trait Component<A> {
    /// Data required to render the component (read-only).
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `vec![...]` - multiple actions
    ///
    /// The default implementation returns nothing, for render-only
    /// components.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
