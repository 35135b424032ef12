//! Layout components (content column, status bar)

use crate::app::App;
use crate::platform::{CREATE_NEW_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the content column gets
const MAX_CONTENT_WIDTH: u16 = 60;

/// Split the screen into a centered content column and a bottom status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let width = chunks[0].width.min(MAX_CONTENT_WIDTH);
    let [content] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(chunks[0]);

    (content, chunks[1])
}

/// Key hints for the current state
fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.form.is_submitted() {
        vec![
            ("Enter", "create another"),
            (CREATE_NEW_SHORTCUT, "create another"),
            ("q", "quit"),
        ]
    } else {
        vec![
            ("Tab", "next"),
            ("Shift+Tab", "prev"),
            ("Enter", "next / register"),
            (SUBMIT_SHORTCUT, "register"),
            ("Esc", "quit"),
        ]
    }
}

/// Draw the status bar: feedback message if any, otherwise key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(ref message) = app.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let mut spans = Vec::new();
        for (key, action) in key_hints(app) {
            spans.push(Span::styled(
                format!(" {key}"),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                format!(" {action} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
