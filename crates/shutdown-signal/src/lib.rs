//! Shutdown signalling for the companion Streamlit server.
//!
//! The desktop shell does not own the Streamlit process. It only asks it to
//! stop by issuing a bare `GET` against a fixed local endpoint. Any response
//! at all, whatever its status, counts as a delivered signal.

mod error;
mod outcome;
mod signaler;


pub use error::{Result, SignalError};
pub use outcome::{ShutdownOutcome, ERROR_PREFIX, SHUTDOWN_SENT};
pub use signaler::{request_shutdown, ShutdownSignaler, SHUTDOWN_URL};
