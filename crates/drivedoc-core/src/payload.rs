//! Binary document returned by the download endpoint.

use crate::checksum;
use crate::file_id::FileId;
use crate::filename;

const OCTET_STREAM: &str = "application/octet-stream";

/// Downloaded document bytes plus the labels the proxy attached to them.
/// Owned by the caller; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    pub bytes: Vec<u8>,
    /// `Content-Type` from the response, or sniffed from the bytes.
    pub content_type: String,
    /// Filename hint from `Content-Disposition`, unsanitized.
    pub filename: Option<String>,
}

impl DocumentPayload {
    /// Builds a payload, sniffing the content type when the header is
    /// missing or only says `application/octet-stream`.
    pub fn new(bytes: Vec<u8>, content_type: Option<&str>, filename: Option<String>) -> Self {
        let declared = content_type
            .map(str::trim)
            .filter(|ct| !ct.is_empty() && !ct.eq_ignore_ascii_case(OCTET_STREAM));
        let content_type = match declared {
            Some(ct) => ct.to_string(),
            None => sniff_content_type(&bytes).to_string(),
        };
        Self {
            bytes,
            content_type,
            filename,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_pdf(&self) -> bool {
        filename::extension_for(&self.content_type) == Some("pdf")
    }

    /// Safe local filename for this document (see [`filename::derive_filename`]).
    pub fn suggested_filename(&self, file_id: &FileId) -> String {
        filename::derive_filename(
            file_id.as_str(),
            self.filename.as_deref(),
            &self.content_type,
        )
    }

    pub fn sha256(&self) -> String {
        checksum::sha256_bytes(&self.bytes)
    }
}

/// Magic-byte detection for the formats the proxy serves.
pub fn sniff_content_type(data: &[u8]) -> &'static str {
    if data.starts_with(b"%PDF") {
        "application/pdf"
    } else if data.starts_with(&[0xFF, 0xD8]) {
        "image/jpeg"
    } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        "image/gif"
    } else {
        OCTET_STREAM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_known_formats() {
        assert_eq!(sniff_content_type(b"%PDF-1.7\n"), "application/pdf");
        assert_eq!(sniff_content_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_content_type(b"\x89PNG\r\n\x1a\n...."), "image/png");
        assert_eq!(sniff_content_type(b"GIF89a.."), "image/gif");
        assert_eq!(sniff_content_type(b"GIF"), OCTET_STREAM);
        assert_eq!(sniff_content_type(b""), OCTET_STREAM);
    }

    #[test]
    fn declared_type_wins() {
        let p = DocumentPayload::new(b"%PDF".to_vec(), Some("text/plain"), None);
        assert_eq!(p.content_type, "text/plain");
    }

    #[test]
    fn octet_stream_is_sniffed() {
        let p = DocumentPayload::new(b"%PDF-1.4".to_vec(), Some("application/octet-stream"), None);
        assert_eq!(p.content_type, "application/pdf");
        assert!(p.is_pdf());
        let p = DocumentPayload::new(b"%PDF-1.4".to_vec(), None, None);
        assert!(p.is_pdf());
    }

    #[test]
    fn suggested_filename_uses_disposition_then_id() {
        let id = FileId::parse("ABC123").unwrap();
        let p = DocumentPayload::new(
            b"%PDF".to_vec(),
            Some("application/pdf"),
            Some("document".into()),
        );
        assert_eq!(p.suggested_filename(&id), "document.pdf");
        let p = DocumentPayload::new(b"\xFF\xD8".to_vec(), None, None);
        assert_eq!(p.suggested_filename(&id), "ABC123.jpg");
    }

    #[test]
    fn sha256_of_bytes() {
        let p = DocumentPayload::new(b"hello\n".to_vec(), None, None);
        assert_eq!(
            p.sha256(),
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
        assert_eq!(p.len(), 6);
        assert!(!p.is_empty());
    }
}
