use crate::domain::application::{errors::DomainError, sink::SubmissionSink, submission::Submission};
use tracing::info;

/// Writes accepted applications to the log as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, submission: &Submission) -> Result<(), DomainError> {
        let record = serde_json::to_string(&submission.record)
            .map_err(|e| DomainError::DeliveryFailed(e.to_string()))?;
        info!(
            submission_id = %submission.id,
            submitted_at = %submission.submitted_at,
            record = %record,
            "Form data"
        );
        Ok(())
    }
}
