//! Local file naming for downloaded documents.
//!
//! Chooses a safe name from the proxy's `Content-Disposition` header, the
//! file ID, and the payload's content type.

mod content_disposition;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use sanitize::{sanitize_filename, NAME_MAX};

use sanitize::truncate_bytes;

/// Name the proxy uses when it has no real filename to offer.
const GENERIC_NAME: &str = "document";

/// File extension (without dot) for a content type, if we know one.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.as_str() {
        "application/pdf" => Some("pdf"),
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "text/plain" => Some("txt"),
        "application/octet-stream" => Some("bin"),
        _ => None,
    }
}

/// Derives a local filename for a downloaded document.
///
/// Prefers the sanitized `Content-Disposition` name. The backend's generic
/// `document` name, and names without an extension, get one from
/// `content_type`. Falls back to `{file_id}.{ext}`.
///
/// - `derive_filename("ABC", Some("report.pdf"), "application/pdf")` → `"report.pdf"`
/// - `derive_filename("ABC", Some("document"), "application/pdf")` → `"document.pdf"`
/// - `derive_filename("ABC", None, "image/png")` → `"ABC.png"`
pub fn derive_filename(file_id: &str, disposition_name: Option<&str>, content_type: &str) -> String {
    let ext = extension_for(content_type);
    let base = disposition_name
        .map(sanitize_filename)
        .filter(|s| !s.is_empty() && s != "." && s != "..")
        .unwrap_or_else(|| id_filename(file_id));

    let has_ext = base != GENERIC_NAME
        && base
            .rsplit_once('.')
            .map(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
            .unwrap_or(false);

    match ext {
        Some(ext) if !has_ext => {
            let stem = truncate_bytes(&base, NAME_MAX - ext.len() - 1);
            format!("{stem}.{ext}")
        }
        _ => base,
    }
}

fn id_filename(file_id: &str) -> String {
    let is_id = !file_id.is_empty()
        && file_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if is_id {
        truncate_bytes(file_id, NAME_MAX).to_string()
    } else {
        sanitize_filename(file_id)
    }
}
