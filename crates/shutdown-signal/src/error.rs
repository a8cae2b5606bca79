pub type Result<T> = std::result::Result<T, SignalError>;

/// Failure to deliver the shutdown signal.
///
/// HTTP error statuses are not represented here. A reachable server that
/// answers 404 or 500 has still received the signal.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// The request could not be sent or no response was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
