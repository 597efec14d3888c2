//! State machine behind the contact form's submit button.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use relay_client::Inquiry;
use tracing::debug;

use crate::controller::events::SubmissionOutcome;
use crate::controller::orchestration::dispatch_relay_command;
use crate::relay_bridge::commands::RelayCommand;

/// How long a settled status stays on screen before the form returns to rest.
pub const STATUS_HOLD_SECS: f64 = 5.0;

static NEXT_SUBMISSION_TOKEN: AtomicU64 = AtomicU64::new(1);

fn next_submission_token() -> u64 {
    NEXT_SUBMISSION_TOKEN.fetch_add(1, Ordering::Relaxed)
}

/// Where the form currently is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Owns the visitor's draft and drives it through submission.
///
/// Timing is caller-fed: the UI passes its frame clock (seconds) into
/// [`ContactFormController::submit`] and [`ContactFormController::tick`],
/// so tests can step time explicitly.
pub struct ContactFormController {
    pub inquiry: Inquiry,
    phase: SubmissionPhase,
    in_flight: Option<u64>,
    revert_at_secs: Option<f64>,
}

impl Default for ContactFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormController {
    pub fn new() -> Self {
        Self {
            inquiry: Inquiry::default(),
            phase: SubmissionPhase::Idle,
            in_flight: None,
            revert_at_secs: None,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// The submit button is live only when the required fields are filled
    /// and nothing is already in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.inquiry.is_complete()
    }

    /// Queues the draft for delivery.
    ///
    /// Ignored while an earlier submission is still in flight and while
    /// required fields are missing. When the command cannot even be queued
    /// the form settles as failed right away, since no reply will come.
    pub fn submit(&mut self, cmd_tx: &Sender<RelayCommand>, now_secs: f64) {
        if self.is_submitting() {
            debug!("ignoring submit while a submission is in flight");
            return;
        }
        if !self.inquiry.is_complete() {
            debug!("ignoring submit with required fields missing");
            return;
        }

        let token = next_submission_token();
        self.phase = SubmissionPhase::Submitting;
        self.in_flight = Some(token);
        self.revert_at_secs = None;

        let queued = dispatch_relay_command(
            cmd_tx,
            RelayCommand::SubmitInquiry {
                token,
                inquiry: self.inquiry.clone(),
            },
        );
        if !queued {
            self.settle(
                SubmissionOutcome::Failed {
                    reason: "relay worker unavailable".to_string(),
                },
                now_secs,
            );
        }
    }

    /// Applies the worker's verdict, provided it answers the submission this
    /// form actually has in flight. Replies to submissions started by an
    /// earlier, discarded form are dropped.
    pub fn apply_outcome(&mut self, token: u64, outcome: SubmissionOutcome, now_secs: f64) {
        if self.in_flight != Some(token) {
            debug!(token, "dropping outcome for a submission this form never started");
            return;
        }
        self.settle(outcome, now_secs);
    }

    /// Returns the form to rest once a settled status has been on screen
    /// long enough. Call every frame.
    pub fn tick(&mut self, now_secs: f64) {
        if let Some(revert_at) = self.revert_at_secs {
            if now_secs >= revert_at {
                self.phase = SubmissionPhase::Idle;
                self.revert_at_secs = None;
            }
        }
    }

    fn settle(&mut self, outcome: SubmissionOutcome, now_secs: f64) {
        match outcome {
            SubmissionOutcome::Delivered => {
                // A delivered inquiry clears the draft; a failed one keeps it
                // so the visitor can retry without retyping.
                self.inquiry = Inquiry::default();
                self.phase = SubmissionPhase::Succeeded;
            }
            SubmissionOutcome::Failed { .. } => {
                self.phase = SubmissionPhase::Failed;
            }
        }
        self.in_flight = None;
        self.revert_at_secs = Some(now_secs + STATUS_HOLD_SECS);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    fn filled_controller() -> ContactFormController {
        let mut form = ContactFormController::new();
        form.inquiry = Inquiry {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            company: String::new(),
            message: "Need a quote".to_string(),
        };
        form
    }

    fn in_flight_token(cmd: &RelayCommand) -> u64 {
        match cmd {
            RelayCommand::SubmitInquiry { token, .. } => *token,
        }
    }

    #[test]
    fn submit_queues_exactly_one_command() {
        let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(4);
        let mut form = filled_controller();

        form.submit(&cmd_tx, 0.0);

        assert_eq!(form.phase(), SubmissionPhase::Submitting);
        let cmd = cmd_rx.try_recv().expect("one command queued");
        match cmd {
            RelayCommand::SubmitInquiry { inquiry, .. } => {
                assert_eq!(inquiry.name, "Jane Doe");
            }
        }
        assert!(cmd_rx.try_recv().is_err(), "no second command");
    }

    #[test]
    fn resubmit_while_in_flight_is_a_no_op() {
        let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(4);
        let mut form = filled_controller();

        form.submit(&cmd_tx, 0.0);
        form.submit(&cmd_tx, 0.1);
        form.submit(&cmd_tx, 0.2);

        assert!(cmd_rx.try_recv().is_ok());
        assert!(cmd_rx.try_recv().is_err(), "repeat submits must not queue");
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn incomplete_drafts_never_queue() {
        let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(4);
        let mut form = ContactFormController::new();
        form.inquiry.name = "Jane Doe".to_string();
        // Email and message still empty.

        assert!(!form.can_submit());
        form.submit(&cmd_tx, 0.0);

        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn delivered_outcome_clears_the_draft_and_holds_success() {
        let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(4);
        let mut form = filled_controller();
        form.submit(&cmd_tx, 10.0);
        let token = in_flight_token(&cmd_rx.try_recv().expect("queued"));

        form.apply_outcome(token, SubmissionOutcome::Delivered, 10.0);

        assert_eq!(form.phase(), SubmissionPhase::Succeeded);
        assert_eq!(form.inquiry, Inquiry::default());

        form.tick(14.9);
        assert_eq!(form.phase(), SubmissionPhase::Succeeded, "status still held");
        form.tick(15.0);
        assert_eq!(form.phase(), SubmissionPhase::Idle, "status reverts on the dot");
    }

    #[test]
    fn failed_outcome_keeps_the_draft_for_a_retry() {
        let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(4);
        let mut form = filled_controller();
        form.submit(&cmd_tx, 0.0);
        let token = in_flight_token(&cmd_rx.try_recv().expect("queued"));

        form.apply_outcome(
            token,
            SubmissionOutcome::Failed {
                reason: "relay declined".to_string(),
            },
            0.5,
        );

        assert_eq!(form.phase(), SubmissionPhase::Failed);
        assert_eq!(form.inquiry.name, "Jane Doe");
        assert_eq!(form.inquiry.message, "Need a quote");

        form.tick(5.5);
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(form.can_submit(), "the preserved draft can go again");
    }

    #[test]
    fn outcomes_for_other_submissions_are_dropped() {
        let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(4);
        let mut form = filled_controller();
        form.submit(&cmd_tx, 0.0);
        let token = in_flight_token(&cmd_rx.try_recv().expect("queued"));

        form.apply_outcome(token + 1, SubmissionOutcome::Delivered, 0.5);
        assert_eq!(
            form.phase(),
            SubmissionPhase::Submitting,
            "a stray token must not settle the form"
        );

        form.apply_outcome(token, SubmissionOutcome::Delivered, 0.5);
        assert_eq!(form.phase(), SubmissionPhase::Succeeded);
    }

    #[test]
    fn fresh_form_ignores_replies_to_a_discarded_one() {
        let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(4);
        let mut old_form = filled_controller();
        old_form.submit(&cmd_tx, 0.0);
        let old_token = in_flight_token(&cmd_rx.try_recv().expect("queued"));
        drop(old_form);

        // The page was rebuilt while the reply was in flight.
        let mut fresh_form = ContactFormController::new();
        fresh_form.apply_outcome(old_token, SubmissionOutcome::Delivered, 1.0);
        assert_eq!(fresh_form.phase(), SubmissionPhase::Idle);

        // Even one that is itself submitting keeps its own reply separate.
        let mut busy_form = filled_controller();
        busy_form.submit(&cmd_tx, 1.0);
        busy_form.apply_outcome(old_token, SubmissionOutcome::Delivered, 1.5);
        assert_eq!(busy_form.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn disconnected_worker_settles_the_form_immediately() {
        let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(4);
        drop(cmd_rx);
        let mut form = filled_controller();

        form.submit(&cmd_tx, 100.0);

        assert_eq!(form.phase(), SubmissionPhase::Failed);
        assert_eq!(form.inquiry.name, "Jane Doe", "draft survives the failure");

        form.tick(105.0);
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn full_queue_settles_the_form_immediately() {
        // A zero-capacity channel refuses every try_send.
        let (cmd_tx, _cmd_rx) = bounded::<RelayCommand>(0);
        let mut form = filled_controller();

        form.submit(&cmd_tx, 0.0);

        assert_eq!(form.phase(), SubmissionPhase::Failed);
    }
}
