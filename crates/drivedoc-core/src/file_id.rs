//! Google Drive file identifier resolution.
//!
//! Accepts either a bare file ID or one of the URL shapes Drive hands out and
//! produces a canonical [`FileId`]. Accepted shapes:
//!
//! - bare token: `1KHBHi5LBNmMlBVpti1WY18H6CJZasyN_`
//! - path-embedded: `https://drive.google.com/file/d/{id}/view`
//! - query parameter: `https://drive.google.com/open?id={id}`,
//!   `https://drive.google.com/uc?export=download&id={id}`

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::DriveError;

/// Opaque Drive file identifier, restricted to `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileId(String);

fn path_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/file/d/([a-zA-Z0-9_-]+)").expect("static regex"))
}

fn query_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").expect("static regex"))
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Resolves user input to a file ID. First match wins; `None` means no shape matched.
pub fn resolve<'a>(input: impl Into<Option<&'a str>>) -> Option<FileId> {
    let input = input.into()?.trim();
    if input.is_empty() {
        return None;
    }

    // A token made only of ID characters cannot contain a path separator or
    // a `scheme://` marker, so it is already canonical.
    if input.chars().all(is_id_char) {
        return Some(FileId(input.to_string()));
    }

    [path_shape(), query_shape()]
        .into_iter()
        .find_map(|re| re.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|m| FileId(m.as_str().to_string()))
}

impl FileId {
    /// Like [`resolve`], but a miss is an [`DriveError::InvalidIdentifier`].
    pub fn parse(input: &str) -> Result<Self, DriveError> {
        resolve(input).ok_or(DriveError::InvalidIdentifier)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Drive's web viewer page for this file.
    pub fn view_url(&self) -> String {
        format!("https://drive.google.com/file/d/{}/view", self.0)
    }

    /// Drive's direct public download link (only works for link-shared files).
    pub fn public_download_url(&self) -> String {
        format!("https://drive.google.com/uc?export=download&id={}", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FileId {
    type Err = DriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileId::parse(s)
    }
}
