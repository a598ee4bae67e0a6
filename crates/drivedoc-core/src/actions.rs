//! Download-to-disk, print and view flows on top of the proxy client.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::client::ProxyClient;
use crate::file_id::FileId;
use crate::payload::DocumentPayload;
use crate::platform::Platform;

/// A document fetched through the proxy and written locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDocument {
    pub file_id: FileId,
    pub path: PathBuf,
    pub bytes: usize,
    pub content_type: String,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// Handed to the printer.
    Printed(SavedDocument),
    /// Printing failed; the document was kept on disk instead.
    SavedInstead { saved: SavedDocument, reason: String },
}

/// Platform calls run under `spawn_blocking`, so an outer
/// `tokio::time::timeout` can cut off a slow print or view command.
pub struct DocumentActions<P: Platform + 'static> {
    client: ProxyClient,
    platform: Arc<P>,
}

impl<P: Platform + 'static> DocumentActions<P> {
    pub fn new(client: ProxyClient, platform: P) -> Self {
        Self {
            client,
            platform: Arc::new(platform),
        }
    }

    pub fn client(&self) -> &ProxyClient {
        &self.client
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Fetches the document and writes it to `target`. An existing directory
    /// (or a path ending in `/`) receives the suggested filename; anything else is
    /// used as the file path.
    pub async fn download_to(&self, input: &str, target: &Path) -> Result<SavedDocument> {
        let id = FileId::parse(input)?;
        let payload = self.client.fetch_document_by_id(&id).await?;
        let path = resolve_target(target, &payload, &id);
        self.save(id, payload, path).await
    }

    /// Fetches the document into `spool_dir` and prints it. A print failure
    /// is not an error: the saved file is reported instead.
    pub async fn print(&self, input: &str, spool_dir: &Path) -> Result<PrintOutcome> {
        let id = FileId::parse(input)?;
        let payload = self.client.fetch_document_by_id(&id).await?;
        let path = spool_dir.join(payload.suggested_filename(&id));
        let saved = self.save(id, payload, path).await?;

        let target = saved.path.clone();
        match self.blocking(move |p| p.print(&target)).await {
            Ok(()) => {
                tracing::info!(path = %saved.path.display(), "sent to printer");
                Ok(PrintOutcome::Printed(saved))
            }
            Err(e) => {
                let reason = format!("{e:#}");
                tracing::warn!(path = %saved.path.display(), %reason, "print failed; document kept on disk");
                Ok(PrintOutcome::SavedInstead { saved, reason })
            }
        }
    }

    /// Fetches the document into `dir` and opens it in the viewer.
    pub async fn view(&self, input: &str, dir: &Path) -> Result<SavedDocument> {
        let id = FileId::parse(input)?;
        let payload = self.client.fetch_document_by_id(&id).await?;
        let path = dir.join(payload.suggested_filename(&id));
        let saved = self.save(id, payload, path).await?;

        let target = saved.path.clone();
        self.blocking(move |p| p.view(&target)).await?;
        Ok(saved)
    }

    async fn save(&self, file_id: FileId, payload: DocumentPayload, path: PathBuf) -> Result<SavedDocument> {
        let bytes = payload.len();
        let content_type = payload.content_type.clone();
        let sha256 = payload.sha256();
        let path = self.blocking(move |p| p.save(&payload, &path)).await?;
        tracing::info!(file_id = %file_id, path = %path.display(), bytes, "document saved");
        Ok(SavedDocument {
            file_id,
            path,
            bytes,
            content_type,
            sha256,
        })
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&P) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let platform = Arc::clone(&self.platform);
        tokio::task::spawn_blocking(move || f(platform.as_ref())).await?
    }
}

fn resolve_target(target: &Path, payload: &DocumentPayload, id: &FileId) -> PathBuf {
    let names_dir = target.is_dir() || target.as_os_str().to_string_lossy().ends_with('/');
    if names_dir {
        target.join(payload.suggested_filename(id))
    } else {
        target.to_path_buf()
    }
}
