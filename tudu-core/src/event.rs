//! Terminal event types

use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

/// Event categories, useful for coarse routing and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Keyboard events
    Key,
    /// Mouse click/drag events
    Mouse,
    /// Scroll wheel events
    Scroll,
    /// Terminal resize events
    Resize,
    /// Periodic tick for animations
    Tick,
}

/// The actual event payload delivered to components.
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Scroll event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick
    Tick,
}

impl EventKind {
    /// Get the category of this event.
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Key(_) => EventType::Key,
            EventKind::Mouse(_) => EventType::Mouse,
            EventKind::Scroll { .. } => EventType::Scroll,
            EventKind::Resize(_, _) => EventType::Resize,
            EventKind::Tick => EventType::Tick,
        }
    }

    /// Whether this event should reach the application regardless of focus
    /// (quit chords and resizes).
    pub fn is_global(&self) -> bool {
        match self {
            EventKind::Key(key) => {
                use crossterm::event::KeyCode;
                key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            }
            EventKind::Resize(_, _) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> EventKind {
        EventKind::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        })
    }

    #[test]
    fn test_event_type() {
        assert_eq!(
            key(KeyCode::Char('a'), KeyModifiers::NONE).event_type(),
            EventType::Key
        );
        assert_eq!(EventKind::Resize(80, 24).event_type(), EventType::Resize);
        assert_eq!(EventKind::Tick.event_type(), EventType::Tick);
    }

    #[test]
    fn test_global_events() {
        assert!(key(KeyCode::Char('c'), KeyModifiers::CONTROL).is_global());
        assert!(EventKind::Resize(80, 24).is_global());
        assert!(!key(KeyCode::Char('c'), KeyModifiers::NONE).is_global());
        assert!(!EventKind::Tick.is_global());
    }
}
