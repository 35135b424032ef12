//! Field validation rules for the registration form

use super::field::FieldName;
use super::form_state::FormFields;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length, counted in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

// local@domain.tld with no whitespace and a single '@'
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Literal dd/mm/yyyy. ASCII digits only, `\d` would accept any Unicode digit.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("DATE_REGEX: invalid regex pattern")
});

/// A single field's validation failure. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First Name is required")]
    FirstNameRequired,
    #[error("Last Name is required")]
    LastNameRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Date of Birth must be in dd/mm/yyyy format")]
    InvalidDateOfBirth,
}

/// Per-field validation errors. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldName, ValidationError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: FieldName) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Message for the field, if it failed validation
    pub fn message(&self, field: FieldName) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First failing field in display order
    pub fn first_field(&self) -> Option<FieldName> {
        self.errors.keys().next().copied()
    }

    /// Iterate in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, ValidationError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::FirstNameRequired);
    }
    Ok(())
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::LastNameRequired);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    if !DATE_REGEX.is_match(value) {
        return Err(ValidationError::InvalidDateOfBirth);
    }
    Ok(())
}

/// Run every rule against the fields and build a fresh error map.
///
/// All rules run on every call; one failing field never hides another.
pub fn validate(fields: &FormFields) -> ErrorMap {
    let checks = [
        (FieldName::FirstName, validate_first_name(&fields.first_name)),
        (FieldName::LastName, validate_last_name(&fields.last_name)),
        (FieldName::Email, validate_email(&fields.email)),
        (FieldName::Password, validate_password(&fields.password)),
        (
            FieldName::ConfirmPassword,
            validate_confirm_password(&fields.password, &fields.confirm_password),
        ),
        (
            FieldName::DateOfBirth,
            validate_date_of_birth(&fields.date_of_birth),
        ),
    ];

    let mut errors = ErrorMap::new();
    for (field, result) in checks {
        if let Err(error) = result {
            errors.insert(field, error);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_fields() -> FormFields {
        FormFields {
            first_name: "Ali".to_string(),
            last_name: "Veli".to_string(),
            email: "ali@example.com".to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
            date_of_birth: "10/10/1990".to_string(),
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_standard_addresses() {
            for email in [
                "ali@example.com",
                "john.doe@mail.example.org",
                "a+tag@b.co",
            ] {
                assert_eq!(validate_email(email), Ok(()), "{email}");
            }
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for email in [
                "",
                "invalid",
                "no-at.example.com",
                "@example.com",
                "ali@",
                "ali@example",
                "ali@@example.com",
                "ali @example.com",
                "ali@exa mple.com",
            ] {
                assert_eq!(
                    validate_email(email),
                    Err(ValidationError::InvalidEmail),
                    "{email}"
                );
            }
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_minimum_length_boundary() {
            assert_eq!(
                validate_password("1234567"),
                Err(ValidationError::PasswordTooShort)
            );
            assert_eq!(validate_password("12345678"), Ok(()));
        }

        #[test]
        fn test_short_and_empty_rejected() {
            assert!(validate_password("123").is_err());
            assert!(validate_password("").is_err());
        }

        #[test]
        fn test_length_counts_utf16_units_not_bytes() {
            // 4 units, 8 bytes
            assert!(validate_password("ğüşö").is_err());
            assert!(validate_password("ğüşöçıİa").is_ok());
        }

        #[test]
        fn test_astral_characters_count_as_two_units() {
            // 4 characters, 8 UTF-16 units
            assert_eq!(validate_password("😀😀😀😀"), Ok(()));
            assert_eq!(
                validate_password("😀😀😀"),
                Err(ValidationError::PasswordTooShort)
            );
        }

        #[test]
        fn test_confirm_must_match_exactly() {
            assert_eq!(validate_confirm_password("password123", "password123"), Ok(()));
            assert_eq!(
                validate_confirm_password("password123", "different"),
                Err(ValidationError::PasswordMismatch)
            );
            assert_eq!(
                validate_confirm_password("password123", "Password123"),
                Err(ValidationError::PasswordMismatch)
            );
        }
    }

    mod date_of_birth {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_literal_pattern() {
            assert_eq!(validate_date_of_birth("10/10/1990"), Ok(()));
            assert_eq!(validate_date_of_birth("01/01/2000"), Ok(()));
            // Shape only, not calendar validity
            assert_eq!(validate_date_of_birth("99/99/9999"), Ok(()));
        }

        #[test]
        fn test_rejects_other_shapes() {
            for value in [
                "",
                "1-1-2000",
                "1/1/2000",
                "01-01-2000",
                "2000/01/01",
                "01/01/00",
                " 01/01/2000",
                "01/01/2000 ",
                "٠١/٠١/٢٠٠٠",
            ] {
                assert_eq!(
                    validate_date_of_birth(value),
                    Err(ValidationError::InvalidDateOfBirth),
                    "{value:?}"
                );
            }
        }
    }

    mod validate_all {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_fields_produce_empty_map() {
            assert!(validate(&valid_fields()).is_empty());
        }

        #[test]
        fn test_empty_form_reports_every_rule_but_confirm() {
            let errors = validate(&FormFields::default());
            // Two empty passwords match each other
            assert_eq!(errors.len(), 5);
            assert!(!errors.contains(FieldName::ConfirmPassword));
            assert_eq!(errors.first_field(), Some(FieldName::FirstName));
        }

        #[test]
        fn test_all_rules_run_without_short_circuit() {
            let fields = FormFields {
                first_name: String::new(),
                last_name: String::new(),
                email: "invalid".to_string(),
                password: "123".to_string(),
                confirm_password: "different".to_string(),
                date_of_birth: "1-1-2000".to_string(),
            };
            let errors = validate(&fields);
            let collected: Vec<_> = errors.iter().collect();
            assert_eq!(
                collected,
                vec![
                    (FieldName::FirstName, ValidationError::FirstNameRequired),
                    (FieldName::LastName, ValidationError::LastNameRequired),
                    (FieldName::Email, ValidationError::InvalidEmail),
                    (FieldName::Password, ValidationError::PasswordTooShort),
                    (FieldName::ConfirmPassword, ValidationError::PasswordMismatch),
                    (FieldName::DateOfBirth, ValidationError::InvalidDateOfBirth),
                ]
            );
        }

        #[test]
        fn test_messages() {
            let mut fields = valid_fields();
            fields.email = "invalid".to_string();
            fields.date_of_birth = "1-1-2000".to_string();
            let errors = validate(&fields);
            assert_eq!(
                errors.message(FieldName::Email).as_deref(),
                Some("Invalid email format")
            );
            assert_eq!(
                errors.message(FieldName::DateOfBirth).as_deref(),
                Some("Date of Birth must be in dd/mm/yyyy format")
            );
            assert_eq!(errors.message(FieldName::Password), None);
        }

        #[test]
        fn test_validation_is_deterministic() {
            let mut fields = valid_fields();
            fields.password = "short".to_string();
            assert_eq!(validate(&fields), validate(&fields));
        }
    }
}
