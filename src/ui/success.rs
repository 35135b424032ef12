//! Success screen shown after a valid submission

use crate::app::App;
use crate::ui::components::{render_centered_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Headline shown once registration succeeds
pub const SUCCESS_MESSAGE: &str = "Registration Successful!";

/// Label of the reset button
pub const CREATE_ANOTHER_LABEL: &str = "Create Another Account";

/// Draw the success panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(4),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Create Another Account
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(inner);

    let fields = &app.form.fields;
    let mut lines = vec![
        Line::from(Span::styled(
            SUCCESS_MESSAGE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Welcome, {} {}", fields.first_name, fields.last_name)),
    ];
    if let Some(at) = app.submitted_at {
        lines.push(Line::from(Span::styled(
            format!("Submitted at {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
    render_centered_button(frame, chunks[2], CREATE_ANOTHER_LABEL, true, Color::Green);
}
