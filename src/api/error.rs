// src/api/error.rs
use std::fmt;

/// The one failure kind a submission can produce. No retry, no backoff and
/// no partial result; the upload form shows the message inline and the user
/// retries manually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request never produced a response (refused, dropped, DNS).
    Transport(String),
    /// The service answered with a non-success status.
    Server(u16),
    /// The response body did not parse as an insight document.
    Malformed(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Transport(msg) => {
                write!(f, "Could not reach the analysis service: {}", msg)
            }
            SubmissionError::Server(status) => {
                write!(f, "Analysis failed (server returned status {})", status)
            }
            SubmissionError::Malformed(msg) => {
                write!(f, "Analysis service returned an unreadable response: {}", msg)
            }
        }
    }
}

impl std::error::Error for SubmissionError {}
