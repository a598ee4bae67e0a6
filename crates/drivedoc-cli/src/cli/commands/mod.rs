//! CLI command handlers. Each command is in its own file.

mod completions;
mod download;
mod email;
mod metadata;
mod print;
mod resolve;
mod view;

pub use completions::{run_completions, run_man};
pub use download::run_download;
pub use email::run_email;
pub use metadata::run_metadata;
pub use print::run_print;
pub use resolve::run_resolve;
pub use view::run_view;

use anyhow::{Context, Result};
use drivedoc_core::config::Config;
use drivedoc_core::ProxyClient;
use std::future::Future;
use std::path::PathBuf;

/// Loaded config plus a client built from it.
pub struct Session {
    pub cfg: Config,
    pub client: ProxyClient,
}

impl Session {
    pub fn new(cfg: Config) -> Result<Self> {
        let client = ProxyClient::from_config(&cfg)
            .with_context(|| format!("proxy base URL {:?}", cfg.base_url))?;
        Ok(Self { cfg, client })
    }

    /// Directory for downloads when no output path is given.
    pub fn download_dir(&self) -> Result<PathBuf> {
        match &self.cfg.download_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Runs one proxy call under the configured timeout, if any. The client
    /// itself never times out, so this is the only place a call gets cut off.
    pub async fn timed<T, F>(&self, what: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match self.cfg.request_timeout() {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .with_context(|| format!("{what} timed out after {}s", limit.as_secs()))?,
            None => fut.await,
        }
    }
}
