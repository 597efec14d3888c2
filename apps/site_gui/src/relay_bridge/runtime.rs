//! Worker thread that owns the async runtime and talks to the form relay.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use relay_client::{RelayClient, RelayConfig};
use tracing::{debug, error, info};

use crate::controller::events::{SubmissionOutcome, UiEvent};
use crate::relay_bridge::commands::RelayCommand;

pub fn launch(config: RelayConfig, cmd_rx: Receiver<RelayCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed {
                    reason: format!("failed to build relay runtime: {err}"),
                });
                error!("failed to build relay runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = RelayClient::new(config);
            info!(endpoint = %client.endpoint(), "relay worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    RelayCommand::SubmitInquiry { token, inquiry } => {
                        let outcome = match client.submit(&inquiry).await {
                            Ok(receipt) => {
                                debug!(
                                    token,
                                    submission_id = %receipt.submission_id,
                                    "inquiry delivered"
                                );
                                SubmissionOutcome::Delivered
                            }
                            Err(err) => {
                                error!(token, kind = err.kind_label(), "inquiry failed: {err}");
                                SubmissionOutcome::Failed {
                                    reason: err.to_string(),
                                }
                            }
                        };
                        // The UI may have moved on; a dropped outcome is fine.
                        let _ = ui_tx.try_send(UiEvent::SubmissionSettled { token, outcome });
                    }
                }
            }
            debug!("relay command queue closed; worker shutting down");
        });
    });
}
