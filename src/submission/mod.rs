//! Diagnostic record of successful registrations

mod sink;
mod traits;

pub use sink::TracingSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
