//! Registration form state and its transitions

use super::field::FieldName;
use super::validation::{validate, ErrorMap};
use serde::Serialize;

/// Trait for cursor movement across form rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// User-entered values, all empty initially
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub date_of_birth: String,
}

impl FormFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::DateOfBirth => &self.date_of_birth,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
            FieldName::DateOfBirth => &mut self.date_of_birth,
        };
        *slot = value;
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Whether the form is being edited or has been submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the form is now `Submitted`
    Submitted,
    /// Validation failed with this many field errors
    Rejected { error_count: usize },
    /// The form was already submitted
    Ignored,
}

/// Full registration form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub fields: FormFields,
    pub errors: ErrorMap,
    pub submission: SubmissionState,
    /// Focused row: 0..=5 are fields, 6 is the REGISTER button
    pub active_field_index: usize,
}

/// Row index of the REGISTER button
pub const REGISTER_BUTTON_ROW: usize = FieldName::ALL.len();

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitted(&self) -> bool {
        self.submission == SubmissionState::Submitted
    }

    /// Returns true if the REGISTER button row is focused
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == REGISTER_BUTTON_ROW
    }

    /// The focused field, `None` on the button row
    pub fn focused_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        REGISTER_BUTTON_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(REGISTER_BUTTON_ROW);
    }
}

/// Overwrite one field. Errors are left as they were until the next submit.
pub fn apply_field_change(
    mut state: RegistrationForm,
    field: FieldName,
    value: String,
) -> RegistrationForm {
    if state.is_submitted() {
        return state;
    }
    state.fields.set(field, value);
    state
}

/// Validate the current fields and move to `Submitted` if nothing failed.
pub fn apply_submit(mut state: RegistrationForm) -> (RegistrationForm, SubmitOutcome) {
    if state.is_submitted() {
        return (state, SubmitOutcome::Ignored);
    }

    state.errors = validate(&state.fields);
    if state.errors.is_empty() {
        state.submission = SubmissionState::Submitted;
        (state, SubmitOutcome::Submitted)
    } else {
        if let Some(field) = state.errors.first_field() {
            state.active_field_index = field.index();
        }
        let error_count = state.errors.len();
        (state, SubmitOutcome::Rejected { error_count })
    }
}

/// Return to an empty form in `Editing`.
pub fn apply_reset(_state: RegistrationForm) -> RegistrationForm {
    RegistrationForm::new()
}
