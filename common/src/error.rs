//! Failure taxonomy and the structured outcome handed back to callers.

use thiserror::Error;

use crate::sanitize;

/// Longest diagnostic text a report will carry.
const MAX_MESSAGE_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// Malformed address, adapter name or preset selection. Rejected before
    /// any process is spawned.
    #[error("{0}")]
    InvalidInput(String),
    /// The external process exceeded its deadline and was killed.
    #[error("command `{command}` timed out after {seconds}s")]
    Timeout { command: String, seconds: u64 },
    /// The external process exited non-zero or could not be spawned.
    #[error("command `{command}` failed: {detail}")]
    CommandFailure { command: String, detail: String },
}

/// Outcome of a user-facing operation: a success flag plus a status line
/// already sanitized and markup-escaped for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpReport {
    pub ok: bool,
    pub message: String,
}

impl OpReport {
    pub fn success(message: impl AsRef<str>) -> Self {
        Self::build(true, message.as_ref())
    }

    pub fn failure(message: impl AsRef<str>) -> Self {
        Self::build(false, message.as_ref())
    }

    fn build(ok: bool, message: &str) -> Self {
        Self {
            ok,
            message: sanitize::sanitize_for_display(message, MAX_MESSAGE_LEN),
        }
    }
}
