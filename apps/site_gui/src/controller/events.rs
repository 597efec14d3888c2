//! Events flowing from the relay worker back to the UI thread.

/// What became of one queued submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed { reason: String },
}

pub enum UiEvent {
    /// The worker could not start; no submission will ever settle.
    WorkerFailed { reason: String },
    /// The relay answered (or definitively failed) for one submission.
    SubmissionSettled {
        token: u64,
        outcome: SubmissionOutcome,
    },
}
