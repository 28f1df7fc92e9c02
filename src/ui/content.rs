// Content region rendering.
// Flattens the active sub-tab's elements into indented lines; controls are
// drawn as `[ label ]` and the focused one is highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::dom::{Element, ElementKind};

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Draw the content region of the active sub-tab.
pub fn draw_content(
    frame: &mut Frame,
    content: &Element,
    title: &str,
    focus: Option<usize>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));

    let descendants = content.descendants();
    if descendants.is_empty() {
        let text = Paragraph::new("This sub-tab has no settings")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let mut items = Vec::new();
    let mut selected = None;
    let mut control_index = 0;

    for (depth, element) in descendants {
        let indent = "  ".repeat(depth);
        match element.kind() {
            ElementKind::Button => {
                if focus == Some(control_index) {
                    selected = Some(items.len());
                }
                control_index += 1;
                items.push(ListItem::new(Line::from(vec![
                    Span::raw(indent),
                    Span::styled(
                        format!("[ {} ]", element.text()),
                        Style::default().fg(Color::Cyan),
                    ),
                ])));
            }
            ElementKind::Div => {
                let text = element.text();
                if !text.is_empty() {
                    items.push(ListItem::new(format!("{}{}", indent, text)));
                }
            }
        }
    }

    let mut list_state = ListState::default();
    list_state.select(selected);

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list_state);
}
