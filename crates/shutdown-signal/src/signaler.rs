use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::{Result, ShutdownOutcome};

/// Endpoint the companion Streamlit process listens on for shutdown.
pub const SHUTDOWN_URL: &str = "http://localhost:9999/shutdown";

/// Stateless façade that asks the companion process to stop.
///
/// Every call is independent. The signaler keeps no client, counter or
/// one-shot guard between calls, so invoking it from the UI and again from
/// the exit hook is harmless.
#[derive(Debug, Clone)]
pub struct ShutdownSignaler {
    endpoint: String,
}

impl ShutdownSignaler {
    /// Creates a signaler targeting [`SHUTDOWN_URL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(SHUTDOWN_URL)
    }

    pub(crate) fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one `GET` to the endpoint and returns the status it answered with.
    ///
    /// The client lives only for this call and keeps no idle connections, so
    /// the response and its connection are released before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::Transport`](crate::SignalError::Transport) when
    /// the request cannot be sent or no response arrives. HTTP error statuses
    /// are not errors.
    pub fn send(&self) -> Result<StatusCode> {
        let client = Client::builder().pool_max_idle_per_host(0).build()?;

        debug!(endpoint = %self.endpoint, "sending shutdown signal");
        let response = client.get(&self.endpoint).send()?;
        let status = response.status();
        drop(response);

        Ok(status)
    }

    /// Sends the signal and folds the result into a displayable outcome.
    ///
    /// Never fails: transport errors become [`ShutdownOutcome::Failed`].
    pub fn request_shutdown(&self) -> ShutdownOutcome {
        match self.send() {
            Ok(status) => {
                info!(endpoint = %self.endpoint, %status, "shutdown signal sent");
                ShutdownOutcome::Sent
            }
            Err(err) => {
                let outcome = ShutdownOutcome::from(&err);
                warn!(endpoint = %self.endpoint, error = %outcome, "shutdown signal failed");
                outcome
            }
        }
    }
}

impl Default for ShutdownSignaler {
    fn default() -> Self {
        Self::new()
    }
}

/// Asks the companion process to stop and returns the message for the UI.
///
/// Either [`SHUTDOWN_SENT`](crate::SHUTDOWN_SENT) or a string starting with
/// [`ERROR_PREFIX`](crate::ERROR_PREFIX).
#[must_use]
pub fn request_shutdown() -> String {
    ShutdownSignaler::new().request_shutdown().to_string()
}
