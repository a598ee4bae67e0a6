//! Error taxonomy for identifier resolution and proxy calls.

use thiserror::Error;

/// Errors surfaced to the immediate caller. Nothing here is retried.
#[derive(Debug, Error)]
pub enum DriveError {
    /// Input is neither a bare file ID nor a recognised Drive URL.
    #[error("invalid Google Drive file ID or URL")]
    InvalidIdentifier,

    /// Recipient failed the minimal `@` check.
    #[error("invalid email address: {0:?}")]
    InvalidRecipient(String),

    /// Non-success HTTP status, or a failure discriminator in the envelope.
    #[error("{}", remote_display(.status, .message))]
    Remote {
        /// HTTP status when the failure came from the status line; `None`
        /// when a 2xx response carried a failure envelope.
        status: Option<u32>,
        message: String,
    },

    /// libcurl could not complete the exchange.
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    /// A 2xx response body was not the expected JSON.
    #[error("decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid proxy base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking transfer task panicked or was cancelled.
    #[error("transfer task failed: {0}")]
    Task(String),
}

fn remote_display(status: &Option<u32>, message: &str) -> String {
    match status {
        Some(code) => format!("proxy returned HTTP {code}: {message}"),
        None => format!("proxy reported failure: {message}"),
    }
}

impl DriveError {
    pub(crate) fn remote(status: Option<u32>, message: impl Into<String>) -> Self {
        DriveError::Remote {
            status,
            message: message.into(),
        }
    }

    /// True for `Remote` errors (server-side or envelope failures).
    pub fn is_remote(&self) -> bool {
        matches!(self, DriveError::Remote { .. })
    }

    /// HTTP status carried by a `Remote` error, if any.
    pub fn status(&self) -> Option<u32> {
        match self {
            DriveError::Remote { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<tokio::task::JoinError> for DriveError {
    fn from(e: tokio::task::JoinError) -> Self {
        DriveError::Task(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_display_with_status() {
        let e = DriveError::remote(Some(404), "not found");
        assert_eq!(e.to_string(), "proxy returned HTTP 404: not found");
        assert!(e.is_remote());
        assert_eq!(e.status(), Some(404));
    }

    #[test]
    fn remote_display_envelope_failure() {
        let e = DriveError::remote(None, "Failed to get metadata");
        assert_eq!(e.to_string(), "proxy reported failure: Failed to get metadata");
        assert_eq!(e.status(), None);
    }

    #[test]
    fn non_remote_has_no_status() {
        assert!(!DriveError::InvalidIdentifier.is_remote());
        assert_eq!(DriveError::InvalidRecipient("x".into()).status(), None);
    }
}
