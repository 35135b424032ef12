//! Field rendering utilities for forms

use crate::state::FieldName;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Character used for masked secrets
const MASK_CHAR: char = '•';

/// Everything needed to draw one input field
pub struct FieldView<'a> {
    pub field: FieldName,
    pub value: &'a str,
    pub is_active: bool,
    pub mask: bool,
    /// Validation message shown in the bottom border
    pub error: Option<String>,
}

/// Text shown inside the field
pub fn display_value(value: &str, mask: bool) -> String {
    if mask {
        MASK_CHAR.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

/// Draw a single-line input field with its label and any validation error
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let has_error = view.error.is_some();

    let border_style = if view.is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if view.value.is_empty() && !view.is_active {
        Line::from(Span::styled(
            view.field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if view.is_active { "▌" } else { "" };
        Line::from(vec![
            Span::raw(display_value(view.value, view.mask)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let mut block = Block::default()
        .title(format!(" {} ", view.field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(content).block(block), area);
}
