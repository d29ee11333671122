//! Scrollable checklist component

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use tudu_core::{Component, EventKind};

/// One row of the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckEntry<'a> {
    /// Row label
    pub label: &'a str,
    /// Whether the row is checked off
    pub done: bool,
}

/// Props for the CheckList component
pub struct CheckListProps<'a, A> {
    /// Rows to display
    pub entries: &'a [CheckEntry<'a>],
    /// Currently selected row
    pub selected: usize,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Title rendered into the border
    pub title: &'a str,
    /// Text shown when there are no rows
    pub empty_hint: &'a str,
    /// Action to emit when the selection moves
    pub on_select: fn(usize) -> A,
}

/// A scrollable checklist with keyboard navigation.
///
/// j/k/arrows move the selection and g/G jump to the ends. Movement is
/// clamped against the row count here, so emitted indices are always in
/// range and the reducer can stay oblivious to the list length. What a
/// row toggle means is the application's business, so toggling is bound
/// through its keymap instead of here.
#[derive(Default)]
pub struct CheckList {
    /// Scroll offset for the viewport
    scroll_offset: usize,
}

impl CheckList {
    /// Create a new CheckList.
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected.saturating_sub(viewport_height - 1);
        }
    }
}

impl<A> Component<A> for CheckList {
    type Props<'a> = CheckListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.entries.is_empty() {
            return None;
        }

        let last = props.entries.len() - 1;
        let selected = props.selected.min(last);

        let EventKind::Key(key) = event else {
            return None;
        };

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = (selected + 1).min(last);
                (next != props.selected).then(|| (props.on_select)(next))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let next = selected.saturating_sub(1);
                (next != props.selected).then(|| (props.on_select)(next))
            }
            KeyCode::Char('g') | KeyCode::Home => {
                (props.selected != 0).then(|| (props.on_select)(0))
            }
            KeyCode::Char('G') | KeyCode::End => {
                (props.selected != last).then(|| (props.on_select)(last))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(props.title)
            .borders(Borders::ALL)
            .border_style(border_style);

        if props.entries.is_empty() {
            let hint = List::new([ListItem::new(Line::styled(
                props.empty_hint,
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let viewport_height = area.height.saturating_sub(2) as usize;
        let selected = props.selected.min(props.entries.len() - 1);
        self.ensure_visible(selected, viewport_height);

        let items: Vec<ListItem> = props
            .entries
            .iter()
            .map(|entry| {
                let marker = if entry.done { "[x] " } else { "[ ] " };
                let label_style = if entry.done {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(entry.label, label_style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default().with_selected(Some(selected));
        *state.offset_mut() = self.scroll_offset;
        frame.render_stateful_widget(list, area, &mut state);
    }
}
