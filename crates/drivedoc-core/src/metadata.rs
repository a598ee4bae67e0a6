//! Passthrough metadata record returned by the proxy's metadata endpoint.
//!
//! The backend sends either the full provider record (camelCase keys from the
//! Drive API) or, when the provider lookup fails, a degraded record with
//! snake_case links and an `error` string. Both land in [`MetadataRecord`].

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "file_id")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "mimeType")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "size_from_number_or_string")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "createdTime")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "modifiedTime")]
    pub modified_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "webViewLink")]
    pub web_view_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "webContentLink")]
    pub web_content_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "iconLink")]
    pub icon_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "thumbnailLink")]
    pub thumbnail_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "downloadUrl", alias = "download_url")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "viewUrl", alias = "view_url")]
    pub view_url: Option<String>,
    /// Proxy-relative download path, e.g. `/api/public/documents/gdrive/download/{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    /// Set when the backend could not reach the provider and fell back to links only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Any field not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl MetadataRecord {
    /// True when the backend returned link-only metadata after a provider failure.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Drive reports `size` as an int64; some gateways stringify it.
fn size_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Number(u64),
        Text(String),
    }

    match Option::<Size>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Size::Number(n)) => Ok(Some(n)),
        Some(Size::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Size::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
