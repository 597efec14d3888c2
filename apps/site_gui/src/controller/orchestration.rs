//! Command dispatch from UI actions onto the relay worker's queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::relay_bridge::commands::RelayCommand;

/// Queues a command for the relay worker.
///
/// Returns false when the command never left the UI thread. The caller must
/// settle whatever state is waiting on a reply, because none will arrive.
pub fn dispatch_relay_command(cmd_tx: &Sender<RelayCommand>, cmd: RelayCommand) -> bool {
    let cmd_name = match &cmd {
        RelayCommand::SubmitInquiry { .. } => "submit_inquiry",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->relay command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "relay command queue is full");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(
                command = cmd_name,
                "relay worker disconnected (possible startup failure)"
            );
            false
        }
    }
}
