//! Render-only tab strip for switching between views of a list

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Tabs,
    Frame,
};
use tudu_core::Component;

/// Props for the FilterTabs component
pub struct FilterTabsProps<'a> {
    /// Tab labels, in display order
    pub labels: &'a [&'a str],
    /// Index of the active tab
    pub active: usize,
}

/// A one-line tab strip highlighting the active filter.
///
/// Render-only: switching tabs is a keymap concern, so this component
/// emits no actions.
#[derive(Default)]
pub struct FilterTabs;

impl FilterTabs {
    /// Create a new FilterTabs.
    pub fn new() -> Self {
        Self
    }
}

impl<A> Component<A> for FilterTabs {
    type Props<'a> = FilterTabsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let tabs = Tabs::new(props.labels.iter().map(|label| label.to_string()))
            .select(props.active.min(props.labels.len().saturating_sub(1)))
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");

        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tudu_core::testing::RenderHarness;

    #[test]
    fn test_render_all_labels() {
        let mut render = RenderHarness::new(40, 1);
        let mut tabs = FilterTabs::new();

        let output = render.render_to_string_plain(|frame| {
            let props = FilterTabsProps {
                labels: &["All", "Active", "Completed"],
                active: 1,
            };
            Component::<()>::render(&mut tabs, frame, frame.area(), props);
        });

        assert!(output.contains("All"));
        assert!(output.contains("Active"));
        assert!(output.contains("Completed"));
    }
}
