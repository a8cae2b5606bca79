use std::error::Error as StdError;
use std::fmt;

use crate::SignalError;

/// Confirmation handed back to the front-end once the companion answered.
pub const SHUTDOWN_SENT: &str = "Streamlit shutdown signal sent.";

/// Prefix of every failure message.
pub const ERROR_PREFIX: &str = "Error: ";

/// Result of a single shutdown request, rendered as the string the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// The companion received the request and produced a response.
    Sent,
    /// Transport failure, with its description.
    Failed(String),
}

impl ShutdownOutcome {
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

impl From<&SignalError> for ShutdownOutcome {
    fn from(err: &SignalError) -> Self {
        Self::Failed(describe(err))
    }
}

impl fmt::Display for ShutdownOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => f.write_str(SHUTDOWN_SENT),
            Self::Failed(description) => write!(f, "{ERROR_PREFIX}{description}"),
        }
    }
}

// reqwest keeps the useful part ("connection refused") in the source chain.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !description.contains(&text) {
            if !description.is_empty() {
                description.push_str(": ");
            }
            description.push_str(&text);
        }
        source = cause.source();
    }

    if description.is_empty() {
        description.push_str("unknown transport error");
    }
    description
}
