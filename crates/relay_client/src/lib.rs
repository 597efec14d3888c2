//! HTTP client for the hosted form relay that turns contact form
//! submissions into email.
//!
//! The relay accepts a multipart POST and answers with a small JSON body.
//! Its `success` flag is the only authoritative outcome signal; the HTTP
//! status code carries no meaning and is never consulted.

use std::time::Duration;

use reqwest::{multipart, Client};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Stock endpoint of the hosted relay service.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
/// Access key identifying the site's relay mailbox.
pub const DEFAULT_ACCESS_KEY: &str = "9a8d2420-793e-4920-a18d-f383e09d0239";
/// Subject line stamped onto every delivered email.
pub const DEFAULT_SUBJECT: &str = "New Contact Form Submission - Canada Sheet Metal";

/// Upper bound on a single relay round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where submissions are delivered and under which identity.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub endpoint: Url,
    pub access_key: String,
    pub subject: String,
}

/// A visitor's filled-in contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl Inquiry {
    /// Name, email, and message are required. Phone and company are not.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Proof that the relay accepted one submission.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub submission_id: Uuid,
    pub remote_message: Option<String>,
}

#[derive(Debug, Error)]
pub enum RelayError {
    /// The request never produced a readable response.
    #[error("could not reach the form relay: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    /// The relay answered but declined the submission.
    #[error("the form relay declined the submission: {}", .remote_message.as_deref().unwrap_or("no reason given"))]
    Rejected { remote_message: Option<String> },
    /// The relay answered with a body that is not the expected JSON.
    #[error("unreadable reply from the form relay: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl RelayError {
    /// Short tag for log lines.
    pub fn kind_label(&self) -> &'static str {
        match self {
            RelayError::Transport { .. } => "transport",
            RelayError::Rejected { .. } => "rejected",
            RelayError::Decode { .. } => "decode",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Thin client around the relay's single submit endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    config: RelayConfig,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    /// Delivers one inquiry to the relay.
    ///
    /// Every field travels as its own multipart part, mirroring a browser
    /// form post. The reply's JSON `success` flag decides the outcome even
    /// when the HTTP status says otherwise.
    pub async fn submit(&self, inquiry: &Inquiry) -> Result<Receipt, RelayError> {
        let submission_id = Uuid::new_v4();
        let form = multipart::Form::new()
            .text("access_key", self.config.access_key.clone())
            .text("name", inquiry.name.clone())
            .text("email", inquiry.email.clone())
            .text("phone", inquiry.phone.clone())
            .text("company", inquiry.company.clone())
            .text("message", inquiry.message.clone())
            .text("subject", self.config.subject.clone());

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .timeout(REQUEST_TIMEOUT)
            .multipart(form)
            .send()
            .await
            .map_err(|source| RelayError::Transport { source })?;

        let status = response.status();
        let reply: RelayReply = response
            .json()
            .await
            .map_err(|source| RelayError::Decode { source })?;

        if reply.success {
            debug!(
                submission_id = %submission_id,
                status = %status,
                "relay: submission accepted"
            );
            Ok(Receipt {
                submission_id,
                remote_message: reply.message,
            })
        } else {
            warn!(
                submission_id = %submission_id,
                status = %status,
                "relay: submission declined"
            );
            Err(RelayError::Rejected {
                remote_message: reply.message,
            })
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
