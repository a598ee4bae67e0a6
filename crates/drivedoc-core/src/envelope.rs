//! JSON response envelope used by the proxy: `{status, message?, data?, error?}`.
//!
//! Deserialized once at the boundary into a two-armed [`Envelope`]; callers
//! never look at the raw `status` string.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::DriveError;

const SUCCESS: &str = "success";

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct RawEnvelope<T> {
    status: Option<String>,
    message: Option<String>,
    data: Option<T>,
    /// Backend-side detail (e.g. provider error text); informational only.
    error: Option<serde_json::Value>,
}

/// Validated envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success {
        message: Option<String>,
        data: Option<T>,
    },
    Failure {
        message: Option<String>,
        detail: Option<serde_json::Value>,
    },
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn from_slice(body: &[u8]) -> Result<Self, DriveError> {
        let raw: RawEnvelope<T> = serde_json::from_slice(body)?;
        Ok(if raw.status.as_deref() == Some(SUCCESS) {
            Envelope::Success {
                message: raw.message,
                data: raw.data,
            }
        } else {
            Envelope::Failure {
                message: raw.message.filter(|m| !m.is_empty()),
                detail: raw.error,
            }
        })
    }
}

impl<T> Envelope<T> {
    /// Success → `(message, data)`; failure → `Remote` with the envelope
    /// message or `default_message`.
    pub fn into_result(
        self,
        default_message: &str,
    ) -> Result<(Option<String>, Option<T>), DriveError> {
        match self {
            Envelope::Success { message, data } => Ok((message, data)),
            Envelope::Failure { message, detail } => {
                if let Some(detail) = detail {
                    tracing::debug!(%detail, "proxy failure detail");
                }
                Err(DriveError::remote(
                    None,
                    message.unwrap_or_else(|| default_message.to_string()),
                ))
            }
        }
    }
}

/// Best-effort `message` from an error body; `None` if the body is not an envelope.
pub fn error_message(body: &[u8]) -> Option<String> {
    let raw: RawEnvelope<serde_json::Value> = serde_json::from_slice(body).ok()?;
    raw.message.filter(|m| !m.is_empty())
}
