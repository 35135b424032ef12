//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    if app.form.is_submitted() {
        success::draw(frame, content_area, app);
    } else {
        forms::draw_registration(frame, content_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::forms::REGISTER_LABEL;
    use super::success::{CREATE_ANOTHER_LABEL, SUCCESS_MESSAGE};
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::FieldName;
    use crate::submission::MockSubmissionSink;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app(config: TuiConfig) -> App {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().return_const(());
        App::new(config, Box::new(sink))
    }

    /// Render the app on an 80x24 screen and return the text, one line per row
    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn fill_valid(app: &mut App) {
        let values = [
            "Ali",
            "Veli",
            "ali@example.com",
            "password123",
            "password123",
            "10/10/1990",
        ];
        for (field, value) in FieldName::ALL.into_iter().zip(values) {
            app.set_field(field, value.to_string());
        }
    }

    #[test]
    fn test_renders_form_fields_and_register_button() {
        let screen = render(&test_app(TuiConfig::default()));
        for field in FieldName::ALL {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains(REGISTER_LABEL));
        assert!(!screen.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_renders_errors_next_to_fields() {
        let mut app = test_app(TuiConfig::default());
        app.set_field(FieldName::Email, "invalid".to_string());
        app.set_field(FieldName::Password, "123".to_string());
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("Invalid email format"));
        assert!(screen.contains("Password must be at least 8 characters"));
        assert!(screen.contains("Date of Birth must be in dd/mm/yyyy format"));
        assert!(screen.contains("First Name is required"));

        let email_row = screen
            .lines()
            .position(|l| l.contains("Invalid email format"))
            .unwrap();
        let label_row = screen.lines().position(|l| l.contains("E-mail")).unwrap();
        assert_eq!(email_row, label_row + 2);
    }

    #[test]
    fn test_passwords_masked_by_default() {
        let mut app = test_app(TuiConfig::default());
        app.set_field(FieldName::Password, "hunter22".to_string());
        let screen = render(&app);
        assert!(!screen.contains("hunter22"));
        assert!(screen.contains("••••••••"));
    }

    #[test]
    fn test_passwords_visible_when_masking_disabled() {
        let mut app = test_app(TuiConfig {
            mask_passwords: Some(false),
            ..Default::default()
        });
        app.set_field(FieldName::Password, "hunter22".to_string());
        assert!(render(&app).contains("hunter22"));
    }

    #[test]
    fn test_renders_success_screen() {
        let mut app = test_app(TuiConfig::default());
        fill_valid(&mut app);
        app.submit();

        let screen = render(&app);
        assert!(screen.contains(SUCCESS_MESSAGE));
        assert!(screen.contains("Welcome, Ali Veli"));
        assert!(screen.contains(CREATE_ANOTHER_LABEL));
        assert!(!screen.contains(REGISTER_LABEL));
    }

    #[test]
    fn test_success_status_bar_lists_quit_key() {
        let mut app = test_app(TuiConfig::default());
        fill_valid(&mut app);
        app.submit();

        let screen = render(&app);
        let status = screen.lines().last().unwrap();
        assert!(status.contains("Enter create another"));
        assert!(status.contains("q quit"));
    }

    #[test]
    fn test_register_visible_again_after_reset() {
        let mut app = test_app(TuiConfig::default());
        fill_valid(&mut app);
        app.submit();
        app.reset();

        let screen = render(&app);
        assert!(screen.contains(REGISTER_LABEL));
        assert!(!screen.contains(SUCCESS_MESSAGE));
        assert!(!screen.contains("Ali"));
    }
}
