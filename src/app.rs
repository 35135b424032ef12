//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::COMMAND_MODIFIER;
use crate::state::{
    apply_field_change, apply_reset, apply_submit, FieldName, Form, RegistrationForm,
    SubmitOutcome,
};
use crate::submission::SubmissionSink;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Registration form state
    pub form: RegistrationForm,
    /// Receiver of successful submissions
    sink: Box<dyn SubmissionSink>,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// When the current registration was submitted
    pub submitted_at: Option<DateTime<Local>>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            form: RegistrationForm::new(),
            sink,
            config,
            quit: false,
            submitted_at: None,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.quit = true;
            return;
        }

        if self.form.is_submitted() {
            self.handle_submitted_key(key);
        } else {
            self.handle_editing_key(key);
        }
    }

    /// Handle keys while the form is being edited
    fn handle_editing_key(&mut self, key: KeyEvent) {
        let on_button_row = self.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Enter if on_button_row => self.submit(),
            KeyCode::Enter => self.form.next_field(),
            KeyCode::Char(c)
                if !on_button_row
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit_focused_field(|value| value.push(c));
            }
            KeyCode::Backspace if !on_button_row => {
                self.edit_focused_field(|value| {
                    value.pop();
                });
            }
            _ => {}
        }
    }

    /// Handle keys on the success screen
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.reset(),
            KeyCode::Char('n')
                if key.modifiers.is_empty() || key.modifiers.contains(COMMAND_MODIFIER) =>
            {
                self.reset()
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Apply an edit to the focused field's value
    fn edit_focused_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.form.focused_field() else {
            return;
        };
        let mut value = self.form.fields.get(field).to_string();
        edit(&mut value);
        self.set_field(field, value);
    }

    /// Overwrite a field value
    pub fn set_field(&mut self, field: FieldName, value: String) {
        let form = std::mem::take(&mut self.form);
        self.form = apply_field_change(form, field, value);
    }

    /// Validate and submit the form
    pub fn submit(&mut self) {
        let form = std::mem::take(&mut self.form);
        let (form, outcome) = apply_submit(form);
        self.form = form;

        match outcome {
            SubmitOutcome::Submitted => {
                self.sink.record(&self.form.fields);
                self.submitted_at = Some(Local::now());
                self.status_message = None;
            }
            SubmitOutcome::Rejected { error_count } => {
                let failed: Vec<&str> =
                    self.form.errors.iter().map(|(field, _)| field.key()).collect();
                tracing::debug!(error_count, ?failed, "Registration rejected");
                let subject = if error_count == 1 {
                    "field needs"
                } else {
                    "fields need"
                };
                self.status_message = Some(format!("{error_count} {subject} attention"));
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Start a new, empty registration
    pub fn reset(&mut self) {
        let form = std::mem::take(&mut self.form);
        self.form = apply_reset(form);
        self.submitted_at = None;
        self.status_message = None;
        tracing::debug!("Registration form reset");
    }
}
