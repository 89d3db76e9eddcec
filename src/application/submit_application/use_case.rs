use crate::{
    application::{
        edit_application::use_case::ApplicationForm,
        submit_application::dto::SubmissionOutcome,
    },
    domain::application::{errors::DomainError, sink::SubmissionSink, submission::Submission},
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Handles the submit button: validate, then hand the record to the sink.
///
/// A submit is a single synchronous attempt. An invalid form delivers nothing
/// and leaves its errors on the form for rendering.
pub struct SubmitApplicationUseCase {
    sink: Arc<dyn SubmissionSink>,
}

impl SubmitApplicationUseCase {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self { sink }
    }

    /// # Errors
    /// Returns [`DomainError::DeliveryFailed`] when the sink refuses a valid
    /// submission. The form state is left unchanged in that case.
    #[instrument(skip_all, fields(position = %form.position()))]
    pub fn execute(&self, form: &mut ApplicationForm) -> Result<SubmissionOutcome, DomainError> {
        if !form.validate() {
            warn!(
                failed = form.errors().len(),
                "Please fill in the required fields correctly"
            );
            return Ok(SubmissionOutcome::Rejected(form.errors().clone()));
        }

        let submission = Submission::new(form.record().clone());
        if let Err(e) = self.sink.deliver(&submission) {
            error!(submission_id = %submission.id, error = %e, "Submission delivery failed");
            return Err(match e {
                DomainError::DeliveryFailed(_) => e,
                other => DomainError::DeliveryFailed(other.to_string()),
            });
        }

        info!(submission_id = %submission.id, "Form submitted successfully");
        Ok(SubmissionOutcome::Accepted(submission))
    }
}
