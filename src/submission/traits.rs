//! Trait abstraction for submission recording to enable mocking in tests

use crate::state::FormFields;

/// Receives the fields of every successful registration
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Record one submitted form
    fn record(&self, fields: &FormFields);
}
