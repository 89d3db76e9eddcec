use super::errors::DomainError;
use super::submission::Submission;

/// Destination for accepted applications.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink: Send + Sync {
    fn deliver(&self, submission: &Submission) -> Result<(), DomainError>;
}

impl<F> SubmissionSink for F
where
    F: Fn(&Submission) -> Result<(), DomainError> + Send + Sync,
{
    fn deliver(&self, submission: &Submission) -> Result<(), DomainError> {
        self(submission)
    }
}
