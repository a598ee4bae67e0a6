//! Proxy endpoint descriptors.
//!
//! An [`Endpoint`] pairs a path template with the resolved file ID. It is
//! built per call and turned into a full URL against the configured base.

use url::Url;

use crate::error::DriveError;
use crate::file_id::FileId;

const DOWNLOAD_PREFIX: &str = "api/public/documents/gdrive/download/";
const METADATA_PREFIX: &str = "api/public/documents/gdrive/metadata/";
const SEND_EMAIL_PATH: &str = "api/public/documents/send-email-gdrive";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /api/public/documents/gdrive/download/{fileId}`
    Download(FileId),
    /// `GET /api/public/documents/gdrive/metadata/{fileId}`
    Metadata(FileId),
    /// `POST /api/public/documents/send-email-gdrive`
    SendEmail,
}

impl Endpoint {
    /// Path relative to the base address (no leading slash).
    pub fn path(&self) -> String {
        match self {
            Endpoint::Download(id) => format!("{DOWNLOAD_PREFIX}{id}"),
            Endpoint::Metadata(id) => format!("{METADATA_PREFIX}{id}"),
            Endpoint::SendEmail => SEND_EMAIL_PATH.to_string(),
        }
    }

    /// Joins the endpoint path onto `base`, keeping any path prefix the base carries.
    pub fn url(&self, base: &Url) -> Result<Url, DriveError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(&self.path())?)
    }
}

/// Parses a configured base address, rejecting anything that cannot carry a path.
pub fn parse_base_url(raw: &str) -> Result<Url, DriveError> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(DriveError::InvalidBaseUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    Ok(url)
}
