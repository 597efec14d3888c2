//! Commands queued from the UI to the relay worker.

use relay_client::Inquiry;

pub enum RelayCommand {
    SubmitInquiry {
        /// Echoed back with the outcome so the form that queued the
        /// submission can tell its own replies from stale ones.
        token: u64,
        inquiry: Inquiry,
    },
}
