//! Rendering and event-to-action mapping for the app

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tudu_components::{
    CheckEntry, CheckList, CheckListProps, FilterTabs, FilterTabsProps, TextInput, TextInputProps,
};
use tudu_core::{display_key, ActionLog, Component, EventKind, Keymap};

use crate::action::Action;
use crate::keymap::Context;
use crate::selector::visible_todos;
use crate::state::{AppState, VisibilityFilter};

/// The component tree of the app.
pub struct AppUi {
    input: TextInput,
    list: CheckList,
    tabs: FilterTabs,
}

impl Default for AppUi {
    fn default() -> Self {
        Self::new()
    }
}

impl AppUi {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            list: CheckList::new(),
            tabs: FilterTabs::new(),
        }
    }

    /// Route an event to the focused component and collect its actions.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let Some(draft) = &state.ui.input {
            let props = TextInputProps {
                value: draft,
                placeholder: "What needs doing?",
                title: " New todo ",
                is_focused: true,
                on_change: Action::InputChange,
                on_submit: Action::InputSubmit,
            };
            return self.input.handle_event(event, props).into_iter().collect();
        }

        let visible = visible_todos(&state.todos, state.visibility_filter);
        let entries: Vec<CheckEntry> = visible
            .iter()
            .map(|todo| CheckEntry {
                label: &todo.text,
                done: todo.completed,
            })
            .collect();
        let props = CheckListProps {
            entries: &entries,
            selected: state.ui.selected,
            is_focused: true,
            title: " Todos ",
            empty_hint: "Nothing here. Press 'a' to add a todo.",
            on_select: Action::SelectionSet,
        };
        self.list.handle_event(event, props).into_iter().collect()
    }

    /// Draw the whole frame from the current state.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        state: &AppState,
        log: &ActionLog,
        keymap: &Keymap<Context>,
    ) {
        let area = frame.area();
        let editing = state.ui.is_editing();

        let mut constraints = vec![
            Constraint::Length(1), // title
            Constraint::Length(1), // filter tabs
            Constraint::Min(1),    // list
        ];
        if editing {
            constraints.push(Constraint::Length(3)); // entry field
        }
        constraints.push(Constraint::Length(1)); // status bar
        let chunks = Layout::vertical(constraints).split(area);

        self.render_title(frame, chunks[0], state);

        let tab_labels: Vec<&str> = VisibilityFilter::all()
            .iter()
            .map(|filter| filter.label())
            .collect();
        Component::<Action>::render(
            &mut self.tabs,
            frame,
            chunks[1],
            FilterTabsProps {
                labels: &tab_labels,
                active: state.visibility_filter.index(),
            },
        );

        let visible = visible_todos(&state.todos, state.visibility_filter);
        let entries: Vec<CheckEntry> = visible
            .iter()
            .map(|todo| CheckEntry {
                label: &todo.text,
                done: todo.completed,
            })
            .collect();
        self.list.render(
            frame,
            chunks[2],
            CheckListProps {
                entries: &entries,
                selected: state.ui.selected,
                is_focused: !editing,
                title: " Todos ",
                empty_hint: "Nothing here. Press 'a' to add a todo.",
                on_select: Action::SelectionSet,
            },
        );

        if editing {
            self.input.render(
                frame,
                chunks[3],
                TextInputProps::<Action> {
                    value: state.ui.input.as_deref().unwrap_or_default(),
                    placeholder: "What needs doing?",
                    title: " New todo ",
                    is_focused: true,
                    on_change: Action::InputChange,
                    on_submit: Action::InputSubmit,
                },
            );
        }

        render_status_bar(frame, chunks[chunks.len() - 1], state, keymap);

        if state.ui.show_help {
            render_help_overlay(frame, area, keymap);
        }
        if state.ui.show_log {
            render_log_overlay(frame, area, log);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let active = state.todos.iter().filter(|todo| !todo.completed).count();
        let done = state.todos.len() - active;
        let title = Line::from(vec![
            Span::styled(
                " tudu ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {active} open, {done} done "),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title).style(Style::default().bg(Color::Rgb(30, 30, 40))),
            area,
        );
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, keymap: &Keymap<Context>) {
    let style = Style::default().bg(Color::Rgb(30, 30, 40));

    let line = if state.ui.is_editing() {
        Line::styled(
            " Enter: add   Esc: cancel ",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let hint = |command: &str, label: &str| {
            let key = keymap
                .key_hint(command, Context::List)
                .map(display_key)
                .unwrap_or_default();
            format!(" {key}:{label} ")
        };
        Line::styled(
            [
                hint("todo.new", "add"),
                hint("todo.toggle", "toggle"),
                hint("filter.cycle", "filter"),
                hint("help.toggle", "help"),
                hint("quit", "quit"),
            ]
            .concat(),
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(line).style(style), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, keymap: &Keymap<Context>) {
    let popup = centered_rect(area, 44, 14);
    frame.render_widget(Clear, popup);

    let row = |command: &str, context: Context, what: &str| {
        let key = keymap
            .key_hint(command, context)
            .map(display_key)
            .unwrap_or_default();
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Cyan)),
            Span::raw(what.to_string()),
        ])
    };

    let lines = vec![
        Line::raw(""),
        row("todo.new", Context::List, "add a new todo"),
        row("todo.toggle", Context::List, "toggle the selected todo"),
        Line::from(vec![
            Span::styled("  j/k       ", Style::default().fg(Color::Cyan)),
            Span::raw("move the selection"),
        ]),
        row("filter.cycle", Context::List, "cycle the visibility filter"),
        row("filter.all", Context::List, "show all todos"),
        row("filter.active", Context::List, "show open todos"),
        row("filter.completed", Context::List, "show finished todos"),
        row("log.toggle", Context::List, "toggle the action log"),
        row("input.cancel", Context::Input, "cancel the entry field"),
        row("quit", Context::List, "quit"),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_log_overlay(frame: &mut Frame, area: Rect, log: &ActionLog) {
    let popup = centered_rect(area, 60, 16);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = log
        .recent(popup.height.saturating_sub(2) as usize)
        .map(|entry| {
            let outcome = match entry.state_changed {
                Some(true) => Span::styled("✓", Style::default().fg(Color::Green)),
                Some(false) => Span::styled("·", Style::default().fg(Color::DarkGray)),
                None => Span::raw(" "),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {:>6} ", entry.elapsed_display()),
                    Style::default().fg(Color::DarkGray),
                ),
                outcome,
                Span::raw(" "),
                Span::styled(entry.summary.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::styled(
            "  no actions recorded yet",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title(" Action log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A rect of at most `width` x `height`, centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::default_keymap;
    use crate::state::{Todo, TodoId};
    use tudu_core::testing::key;

    fn state_with_todos() -> AppState {
        AppState {
            todos: vec![
                Todo::new(TodoId(0), "first"),
                Todo {
                    id: TodoId(1),
                    text: "second".into(),
                    completed: true,
                },
            ],
            ..AppState::default()
        }
    }

    #[test]
    fn test_map_event_routes_to_list() {
        let mut ui = AppUi::new();
        let state = state_with_todos();

        let actions = ui.map_event(&EventKind::Key(key("j")), &state);
        assert_eq!(actions, vec![Action::SelectionSet(1)]);
    }

    #[test]
    fn test_map_event_routes_to_input_while_editing() {
        let mut ui = AppUi::new();
        let mut state = state_with_todos();
        state.ui.input = Some(String::new());

        let actions = ui.map_event(&EventKind::Key(key("x")), &state);
        assert_eq!(actions, vec![Action::InputChange("x".into())]);
    }

    #[test]
    fn test_selection_moves_over_visible_not_all() {
        let mut ui = AppUi::new();
        let mut state = state_with_todos();
        state.visibility_filter = VisibilityFilter::ShowCompleted;

        // One visible row; moving down emits nothing.
        let actions = ui.map_event(&EventKind::Key(key("j")), &state);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 10, 4);
        let popup = centered_rect(area, 60, 16);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_render_smoke() {
        use tudu_core::testing::RenderHarness;

        let mut render = RenderHarness::new(50, 12);
        let mut ui = AppUi::new();
        let state = state_with_todos();
        let log = ActionLog::default();
        let keymap = default_keymap();

        let output = render.render_to_string_plain(|frame| {
            ui.render(frame, &state, &log, &keymap);
        });

        assert!(output.contains("tudu"));
        assert!(output.contains("[ ] first"));
        assert!(output.contains("[x] second"));
        assert!(output.contains("All"));
    }
}
