use crate::domain::application::{errors::ErrorMap, submission::Submission};

/// What happened to a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The record was valid and the sink accepted it.
    Accepted(Submission),
    /// Nothing was delivered; the errors explain why.
    Rejected(ErrorMap),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }
}
