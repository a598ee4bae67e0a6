//! Parse HTTP response header lines.

use crate::filename::parse_content_disposition_filename;

/// Headers of the final response in a redirect chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub content_disposition: Option<String>,
}

impl ResponseHeaders {
    /// Parses collected header lines. libcurl hands us the headers of every
    /// hop when following redirects; each status line resets the state so
    /// only the last response counts.
    pub fn parse(lines: &[String]) -> Self {
        let mut out = Self::default();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("HTTP/") {
                out = Self::default();
                continue;
            }
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                out.content_type = Some(value.to_string());
            } else if name.eq_ignore_ascii_case("content-length") {
                out.content_length = value.parse::<u64>().ok();
            } else if name.eq_ignore_ascii_case("content-disposition") {
                out.content_disposition = Some(value.to_string());
            }
        }
        out
    }

    /// Filename hint from `Content-Disposition`, if any.
    pub fn filename(&self) -> Option<String> {
        self.content_disposition
            .as_deref()
            .and_then(parse_content_disposition_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_proxy_download_headers() {
        let h = ResponseHeaders::parse(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Type: application/pdf",
            "Content-Disposition: inline; filename=\"document\"",
            "Content-Length: 12345",
            "Access-Control-Allow-Origin: *",
        ]));
        assert_eq!(h.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(h.content_length, Some(12345));
        assert_eq!(h.filename().as_deref(), Some("document"));
    }

    #[test]
    fn last_hop_wins_after_redirect() {
        let h = ResponseHeaders::parse(&lines(&[
            "HTTP/1.1 302 Found",
            "Location: /elsewhere",
            "Content-Type: text/html",
            "",
            "HTTP/1.1 200 OK",
            "Content-Type: image/png",
        ]));
        assert_eq!(h.content_type.as_deref(), Some("image/png"));
        assert_eq!(h.content_disposition, None);
    }

    #[test]
    fn case_insensitive_names() {
        let h = ResponseHeaders::parse(&lines(&["content-TYPE: text/plain", "CONTENT-LENGTH: x"]));
        assert_eq!(h.content_type.as_deref(), Some("text/plain"));
        assert_eq!(h.content_length, None);
    }
}
