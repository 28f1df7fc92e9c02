// UI module for drawing a settings page in the terminal.
// Reads the element tree built by the controller: navigation region as a tab
// bar, content region as lines with focusable controls.

mod content;
mod tabs;

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::dom::{CONTENT_CLASS, Element, NAV_CLASS};

/// Navigation controls of a displayed page, in order.
pub fn navigation_controls(root: &Element) -> Vec<Element> {
    root.find_by_class(NAV_CLASS)
        .map(|nav| nav.buttons())
        .unwrap_or_default()
}

/// Controls rendered by the active sub-tab, in document order.
pub fn content_controls(root: &Element) -> Vec<Element> {
    root.find_by_class(CONTENT_CLASS)
        .map(|content| content.buttons())
        .unwrap_or_default()
}

/// Draw the whole settings page.
///
/// `focus` indexes into [`content_controls`].
pub fn draw(frame: &mut Frame, root: &Element, title: &str, focus: Option<usize>, status: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Sub-tab content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let navigation = root.find_by_class(NAV_CLASS);
    let content_region = root.find_by_class(CONTENT_CLASS);

    match &navigation {
        Some(nav) => tabs::draw_tabs(frame, nav, title, chunks[0]),
        None => frame.render_widget(Block::default().borders(Borders::BOTTOM), chunks[0]),
    }

    let content_title = navigation
        .as_ref()
        .and_then(tabs::active_header)
        .unwrap_or_default();
    match &content_region {
        Some(region) => content::draw_content(frame, region, &content_title, focus, chunks[1]),
        None => content::render_empty(frame, chunks[1], "Nothing to display"),
    }

    draw_status_bar(frame, status, chunks[2]);
}

/// Draw the status bar with keybinding hints and a trailing status message.
fn draw_status_bar(frame: &mut Frame, status: &str, area: Rect) {
    let mut hints = vec![
        Span::raw(" Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↑↓ "),
        Span::styled("Focus", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↵ "),
        Span::styled("Activate", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    if !status.is_empty() {
        hints.push(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}
