//! Registration form field identifiers

use serde::Serialize;

/// The six attributes of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    DateOfBirth,
}

impl FieldName {
    /// All fields in the order they are rendered
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::DateOfBirth,
    ];

    /// Label shown in the field's border
    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Email => "E-mail",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm Password",
            FieldName::DateOfBirth => "Date of Birth",
        }
    }

    /// Key used in the diagnostic log
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
            FieldName::DateOfBirth => "dateOfBirth",
        }
    }

    /// Placeholder shown while the field is empty and unfocused
    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::Email => "name@example.com",
            FieldName::DateOfBirth => "dd/mm/yyyy",
            _ => "(empty)",
        }
    }

    /// Whether the value should be masked on screen
    pub fn is_secret(self) -> bool {
        matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }

    /// Row index of this field in the form
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field at the given row, `None` for the button row
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
