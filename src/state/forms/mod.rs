//! Form domain layer
//!
//! Field identifiers, validation rules, and the registration form's
//! state transitions. Nothing here touches the terminal.

mod field;
mod form_state;
mod validation;

pub use field::FieldName;
pub use form_state::{
    apply_field_change, apply_reset, apply_submit, Form, FormFields, RegistrationForm,
    SubmitOutcome,
};

#[cfg(test)]
pub use form_state::{SubmissionState, REGISTER_BUTTON_ROW};
#[cfg(test)]
pub use validation::ValidationError;
