//! One blocking HTTP exchange over libcurl.
//!
//! Each call builds a fresh `Easy` handle, performs exactly one request
//! (following redirects) and returns status, parsed headers and body. No
//! retries and no timeouts are applied here. Runs in the current thread;
//! call from `spawn_blocking` if used from async code.

mod headers;

pub use headers::ResponseHeaders;

use std::str;

use crate::error::DriveError;

const MAX_REDIRECTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Extra request headers as (name, value).
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: ResponseHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossily decoded (for error reporting).
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs `req` and returns the final response after redirects.
pub fn perform(req: &HttpRequest, user_agent: &str) -> Result<HttpResponse, DriveError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&req.url)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    if !user_agent.is_empty() {
        easy.useragent(user_agent)?;
    }

    match req.method {
        Method::Get => easy.get(true)?,
        Method::Post => {
            let payload = req.body.as_deref().unwrap_or_default();
            easy.post(true)?;
            easy.post_fields_copy(payload)?;
        }
    }

    let mut list = curl::easy::List::new();
    for (k, v) in &req.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !req.headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(HttpResponse {
        status,
        headers: ResponseHeaders::parse(&header_lines),
        body,
    })
}
