// Tab bar rendering for the navigation region.
// The control carrying the active marker is drawn as the selected tab.

use ratatui::{prelude::*, widgets::*};

use crate::dom::{ACTIVE_CLASS, Element};

/// Header of the control carrying the active marker.
pub fn active_header(navigation: &Element) -> Option<String> {
    navigation
        .buttons()
        .into_iter()
        .find(|button| button.has_class(ACTIVE_CLASS))
        .map(|button| button.text())
}

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, navigation: &Element, title: &str, area: Rect) {
    let controls = navigation.buttons();

    let tab_titles: Vec<Line> = controls
        .iter()
        .map(|control| {
            let style = if control.has_class(ACTIVE_CLASS) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(control.text(), style))
        })
        .collect();

    let selected_index = controls
        .iter()
        .position(|c| c.has_class(ACTIVE_CLASS))
        .unwrap_or(0);

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", title))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
