use crate::domain::application::{errors::DomainError, sink::SubmissionSink, submission::Submission};
use std::sync::mpsc::{Receiver, Sender, channel};

/// Forwards accepted applications to a receiver owned by the caller.
pub struct ChannelSink {
    sender: Sender<Submission>,
}

impl ChannelSink {
    pub fn new(sender: Sender<Submission>) -> Self {
        Self { sender }
    }

    /// Sink plus the receiving end.
    pub fn pair() -> (Self, Receiver<Submission>) {
        let (tx, rx) = channel();
        (Self::new(tx), rx)
    }
}

impl SubmissionSink for ChannelSink {
    fn deliver(&self, submission: &Submission) -> Result<(), DomainError> {
        self.sender
            .send(submission.clone())
            .map_err(|_| DomainError::DeliveryFailed("submission receiver dropped".to_string()))
    }
}
