//! Remote document client for the backend Drive proxy.
//!
//! Three independent operations share the identifier resolver and a base
//! address. Every operation validates its input first (no network I/O on
//! failure) and then performs exactly one HTTP round trip. Nothing is
//! retried, cached or deduplicated, and no timeouts are imposed; wrap calls
//! in `tokio::time::timeout` if you need one.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::endpoint::{parse_base_url, Endpoint};
use crate::envelope::{self, Envelope};
use crate::error::DriveError;
use crate::file_id::FileId;
use crate::metadata::MetadataRecord;
use crate::payload::DocumentPayload;
use crate::transport::{self, HttpRequest, HttpResponse};

pub const DEFAULT_DOCUMENT_TYPE: &str = "Document";
pub const DEFAULT_DOCUMENT_NAME: &str = "document";
pub const DEFAULT_USER_AGENT: &str = concat!("drivedoc/", env!("CARGO_PKG_VERSION"));

const METADATA_FAILED: &str = "Failed to get metadata";
const EMAIL_FAILED: &str = "Failed to send email";

/// Optional labels for an email send; `None` falls back to the proxy defaults.
#[derive(Debug, Clone, Default)]
pub struct EmailRequest {
    pub recipient: String,
    pub document_type: Option<String>,
    pub document_name: Option<String>,
}

impl EmailRequest {
    pub fn to(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct EmailBody<'a> {
    email: &'a str,
    file_id: &'a str,
    document_type: &'a str,
    document_name: &'a str,
}

/// What the proxy echoes back after sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailReceipt {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub file_id: String,
    #[serde(default)]
    pub document_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: Option<String>,
    pub receipt: Option<EmailReceipt>,
}

#[derive(Debug, Clone)]
pub struct ProxyClient {
    base: Url,
    user_agent: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Result<Self, DriveError> {
        Ok(Self {
            base: parse_base_url(base_url)?,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, DriveError> {
        let mut client = Self::new(&cfg.base_url)?;
        if let Some(ua) = &cfg.user_agent {
            client.user_agent = ua.clone();
        }
        Ok(client)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Downloads the document behind `input` (file ID or Drive URL).
    ///
    /// Asks for `application/pdf`. A non-2xx status becomes
    /// `Remote { status, message: <body text> }`.
    pub async fn fetch_document(&self, input: &str) -> Result<DocumentPayload, DriveError> {
        let id = FileId::parse(input)?;
        self.fetch_document_by_id(&id).await
    }

    pub async fn fetch_document_by_id(&self, id: &FileId) -> Result<DocumentPayload, DriveError> {
        let url = Endpoint::Download(id.clone()).url(&self.base)?;
        tracing::debug!(file_id = %id, %url, "download via proxy");

        let resp = self
            .send(HttpRequest::get(url.as_str()).header("Accept", "application/pdf"))
            .await?;
        if !resp.is_success() {
            return Err(DriveError::remote(Some(resp.status), resp.body_text()));
        }

        let filename = resp.headers.filename();
        let payload = DocumentPayload::new(resp.body, resp.headers.content_type.as_deref(), filename);
        tracing::debug!(
            file_id = %id,
            bytes = payload.len(),
            content_type = %payload.content_type,
            "download complete"
        );
        Ok(payload)
    }

    /// Fetches the metadata record for `input`.
    pub async fn fetch_metadata(&self, input: &str) -> Result<MetadataRecord, DriveError> {
        let id = FileId::parse(input)?;
        self.fetch_metadata_by_id(&id).await
    }

    pub async fn fetch_metadata_by_id(&self, id: &FileId) -> Result<MetadataRecord, DriveError> {
        let url = Endpoint::Metadata(id.clone()).url(&self.base)?;
        tracing::debug!(file_id = %id, %url, "metadata via proxy");

        let resp = self.send(HttpRequest::get(url.as_str())).await?;
        if !resp.is_success() {
            return Err(status_error(&resp));
        }

        let (_, data) = Envelope::<MetadataRecord>::from_slice(&resp.body)?.into_result(METADATA_FAILED)?;
        let record = data.ok_or_else(|| DriveError::remote(None, METADATA_FAILED))?;
        if let Some(err) = &record.error {
            tracing::warn!(file_id = %id, error = %err, "proxy returned degraded metadata");
        }
        Ok(record)
    }

    /// Asks the proxy to email the document behind `input` to `req.recipient`.
    ///
    /// The identifier and recipient are checked before any request is made.
    pub async fn send_by_email(
        &self,
        input: &str,
        req: &EmailRequest,
    ) -> Result<Acknowledgement, DriveError> {
        let id = FileId::parse(input)?;
        if !req.recipient.contains('@') {
            return Err(DriveError::InvalidRecipient(req.recipient.clone()));
        }

        let body = serde_json::to_vec(&EmailBody {
            email: &req.recipient,
            file_id: id.as_str(),
            document_type: req.document_type.as_deref().unwrap_or(DEFAULT_DOCUMENT_TYPE),
            document_name: req.document_name.as_deref().unwrap_or(DEFAULT_DOCUMENT_NAME),
        })?;
        let url = Endpoint::SendEmail.url(&self.base)?;
        tracing::debug!(file_id = %id, %url, "email via proxy");

        let resp = self.send(HttpRequest::post_json(url.as_str(), body)).await?;
        if !resp.is_success() {
            return Err(status_error(&resp));
        }

        let (message, receipt) =
            Envelope::<EmailReceipt>::from_slice(&resp.body)?.into_result(EMAIL_FAILED)?;
        tracing::info!(file_id = %id, recipient = %req.recipient, "document emailed");
        Ok(Acknowledgement { message, receipt })
    }

    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, DriveError> {
        let user_agent = self.user_agent.clone();
        tokio::task::spawn_blocking(move || transport::perform(&req, &user_agent)).await?
    }
}

/// Non-2xx on a JSON endpoint: envelope message if present, else a generic one.
fn status_error(resp: &HttpResponse) -> DriveError {
    let message = envelope::error_message(&resp.body)
        .unwrap_or_else(|| format!("HTTP error! status: {}", resp.status));
    DriveError::remote(Some(resp.status), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    // An unroutable base: any accidental request would fail with Transport, not
    // the validation error asserted below.
    fn client() -> ProxyClient {
        ProxyClient::new("http://127.0.0.1:9").unwrap()
    }

    #[tokio::test]
    async fn invalid_identifier_rejected_before_io() {
        let c = client();
        assert!(matches!(
            c.fetch_document("https://example.com/nothing").await,
            Err(DriveError::InvalidIdentifier)
        ));
        assert!(matches!(
            c.fetch_metadata("").await,
            Err(DriveError::InvalidIdentifier)
        ));
        assert!(matches!(
            c.send_by_email("", &EmailRequest::to("a@b.c")).await,
            Err(DriveError::InvalidIdentifier)
        ));
    }

    #[tokio::test]
    async fn invalid_recipient_rejected_before_io() {
        let err = client()
            .send_by_email("ABC123", &EmailRequest::to("not-an-email"))
            .await
            .unwrap_err();
        match err {
            DriveError::InvalidRecipient(r) => assert_eq!(r, "not-an-email"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn email_body_defaults() {
        let body = serde_json::to_value(EmailBody {
            email: "a@b.c",
            file_id: "ABC",
            document_type: DEFAULT_DOCUMENT_TYPE,
            document_name: DEFAULT_DOCUMENT_NAME,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "email": "a@b.c",
                "file_id": "ABC",
                "document_type": "Document",
                "document_name": "document"
            })
        );
    }

    #[test]
    fn from_config_applies_user_agent() {
        let cfg = Config {
            base_url: "https://proxy.example.com/".into(),
            user_agent: Some("kiosk/2".into()),
            ..Config::default()
        };
        let c = ProxyClient::from_config(&cfg).unwrap();
        assert_eq!(c.user_agent, "kiosk/2");
        assert_eq!(c.base_url().as_str(), "https://proxy.example.com/");
    }

    #[test]
    fn bad_base_url_rejected() {
        assert!(matches!(
            ProxyClient::new("::nope"),
            Err(DriveError::InvalidBaseUrl(_))
        ));
    }
}
