//! `tracing`-backed submission sink

use super::traits::SubmissionSink;
use crate::state::FormFields;

/// Replacement text for redacted passwords
pub const REDACTED: &str = "********";

/// Logs each submission as a JSON object on the `registration` target
#[derive(Debug, Clone)]
pub struct TracingSink {
    redact_passwords: bool,
}

impl TracingSink {
    pub fn new(redact_passwords: bool) -> Self {
        Self { redact_passwords }
    }

    /// Serialize the fields the way they are logged
    pub fn render(&self, fields: &FormFields) -> serde_json::Result<String> {
        if self.redact_passwords {
            let redacted = FormFields {
                password: REDACTED.to_string(),
                confirm_password: REDACTED.to_string(),
                ..fields.clone()
            };
            serde_json::to_string(&redacted)
        } else {
            serde_json::to_string(fields)
        }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SubmissionSink for TracingSink {
    fn record(&self, fields: &FormFields) {
        match self.render(fields) {
            Ok(json) => {
                tracing::info!(target: "registration", form = %json, "Registration submitted");
            }
            Err(err) => {
                tracing::warn!(target: "registration", "Failed to serialize submission: {err}");
            }
        }
    }
}
