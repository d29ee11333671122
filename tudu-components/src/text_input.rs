//! Single-line text input component

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tudu_core::{Component, EventKind};

/// Props for the TextInput component
pub struct TextInputProps<'a, A> {
    /// Current input value
    pub value: &'a str,
    /// Placeholder shown while the value is empty
    pub placeholder: &'a str,
    /// Title rendered into the border
    pub title: &'a str,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Action to emit when the value changes
    pub on_change: fn(String) -> A,
    /// Action to emit when the user submits (Enter)
    pub on_submit: fn(String) -> A,
}

/// A single-line text input with a movable cursor.
///
/// Emits `on_change` for every edit and `on_submit` on Enter. The cursor
/// is tracked as a character offset, so multi-byte input behaves the same
/// as ASCII.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position as a character offset into the value
    cursor: usize,
}

impl TextInput {
    /// Create a new TextInput.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the cursor to the start of the line.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the given value.
    pub fn jump_to_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.chars().count());
    }

    fn byte_offset(value: &str, char_offset: usize) -> usize {
        value
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(value.len())
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut next = value.to_string();
        next.insert(Self::byte_offset(value, self.cursor), c);
        self.cursor += 1;
        next
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let mut next = value.to_string();
        next.remove(Self::byte_offset(value, self.cursor));
        Some(next)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.chars().count() {
            return None;
        }
        let mut next = value.to_string();
        next.remove(Self::byte_offset(value, self.cursor));
        Some(next)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.jump_to_end(props.value);
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some((props.on_change)(self.insert_char(props.value, c))),
            KeyCode::Backspace => self.delete_before(props.value).map(props.on_change),
            KeyCode::Delete => self.delete_at(props.value).map(props.on_change),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(props.value.chars().count());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.jump_to_end(props.value);
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(props.title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if props.is_focused {
            // +1 on each axis for the border
            let cursor_x = area.x + 1 + self.cursor as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tudu_core::testing::{ctrl_key, key, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
        Submit(String),
    }

    fn props(value: &str, focused: bool) -> TextInputProps<'_, TestAction> {
        TextInputProps {
            value,
            placeholder: "What needs doing?",
            title: " New todo ",
            is_focused: focused,
            on_change: TestAction::Change,
            on_submit: TestAction::Submit,
        }
    }

    fn emitted(input: &mut TextInput, event: EventKind, p: TextInputProps<'_, TestAction>) -> Vec<TestAction> {
        input.handle_event(&event, p).into_iter().collect()
    }

    #[test]
    fn test_typing_at_end() {
        let mut input = TextInput::new();
        input.jump_to_end("hell");

        let actions = emitted(&mut input, EventKind::Key(key("o")), props("hell", true));
        assert_eq!(actions, vec![TestAction::Change("hello".into())]);
    }

    #[test]
    fn test_typing_in_middle() {
        let mut input = TextInput::new();
        // cursor starts at 0, so insertion prepends
        let actions = emitted(&mut input, EventKind::Key(key("x")), props("abc", true));
        assert_eq!(actions, vec![TestAction::Change("xabc".into())]);
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::new();
        input.jump_to_end("hello");

        let actions = emitted(
            &mut input,
            EventKind::Key(key("backspace")),
            props("hello", true),
        );
        assert_eq!(actions, vec![TestAction::Change("hell".into())]);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new();
        let actions = emitted(
            &mut input,
            EventKind::Key(key("backspace")),
            props("hello", true),
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.jump_to_end("héllo");

        let actions = emitted(
            &mut input,
            EventKind::Key(key("backspace")),
            props("héllo", true),
        );
        assert_eq!(actions, vec![TestAction::Change("héll".into())]);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::new();
        input.jump_to_end("hello");

        let actions = emitted(
            &mut input,
            EventKind::Key(ctrl_key('u')),
            props("hello", true),
        );
        assert_eq!(actions, vec![TestAction::Change(String::new())]);
    }

    #[test]
    fn test_submit() {
        let mut input = TextInput::new();
        let actions = emitted(&mut input, EventKind::Key(key("enter")), props("hello", true));
        assert_eq!(actions, vec![TestAction::Submit("hello".into())]);
    }

    #[test]
    fn test_unfocused_ignores_events() {
        let mut input = TextInput::new();
        let actions = emitted(&mut input, EventKind::Key(key("a")), props("", false));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_placeholder_and_value() {
        let mut render = RenderHarness::new(30, 3);
        let mut input = TextInput::new();

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("", true));
        });
        assert!(output.contains("What needs doing?"));

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("buy milk", true));
        });
        assert!(output.contains("buy milk"));
    }
}
