//! Registration form rendering

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_centered_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows used by one input field (borders + value)
const FIELD_HEIGHT: u16 = 3;

/// Label of the submit button
pub const REGISTER_LABEL: &str = "REGISTER";

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FieldName::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = &app.form;
    let mask_passwords = app.config.mask_passwords();

    for field in FieldName::ALL {
        draw_field(
            frame,
            chunks[field.index()],
            FieldView {
                field,
                value: form.fields.get(field),
                is_active: form.focused_field() == Some(field),
                mask: mask_passwords && field.is_secret(),
                error: form.errors.message(field),
            },
        );
    }

    render_centered_button(
        frame,
        chunks[FieldName::ALL.len()],
        REGISTER_LABEL,
        form.is_buttons_row_active(),
        Color::Green,
    );
}
