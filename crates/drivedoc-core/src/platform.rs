//! Local side effects of handling a document: saving, printing, viewing.
//!
//! [`ProxyClient`](crate::client::ProxyClient) never touches the local
//! machine. [`DocumentActions`](crate::actions::DocumentActions) drives these
//! operations through the [`Platform`] trait so tests can swap in
//! [`RecordingPlatform`].

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;

use crate::config::Config;
use crate::payload::DocumentPayload;

pub trait Platform: Send + Sync {
    /// Writes `payload` to `path`, creating parent directories. Returns the path written.
    fn save(&self, payload: &DocumentPayload, path: &Path) -> Result<PathBuf>;

    /// Sends a saved file to the printer.
    fn print(&self, path: &Path) -> Result<()>;

    /// Opens a saved file in the desktop viewer.
    fn view(&self, path: &Path) -> Result<()>;
}

/// Real file system plus external print/view commands.
#[derive(Debug, Clone)]
pub struct SystemPlatform {
    pub print_command: String,
    pub view_command: String,
}

impl SystemPlatform {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            print_command: cfg.print_command.clone(),
            view_command: cfg.view_command.clone(),
        }
    }
}

impl Default for SystemPlatform {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Runs `command` (program plus whitespace-separated arguments) with `path` appended.
fn run_with_path(command: &str, path: &Path) -> Result<()> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("no command configured");
    };
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("spawn {program}"))?;
    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}

impl Platform for SystemPlatform {
    fn save(&self, payload: &DocumentPayload, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(path, &payload.bytes).with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = payload.len(), "saved document");
        Ok(path.to_path_buf())
    }

    fn print(&self, path: &Path) -> Result<()> {
        run_with_path(&self.print_command, path)
            .with_context(|| format!("print {}", path.display()))
    }

    fn view(&self, path: &Path) -> Result<()> {
        run_with_path(&self.view_command, path)
            .with_context(|| format!("open {}", path.display()))
    }
}

/// One recorded platform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Save { path: PathBuf, bytes: usize },
    Print(PathBuf),
    View(PathBuf),
}

/// In-memory test double: records calls, writes nothing.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    /// When set, `print` fails with this message (e.g. no printer).
    pub fail_print: Option<String>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_print(reason: impl Into<String>) -> Self {
        Self {
            fail_print: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: PlatformCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl Platform for RecordingPlatform {
    fn save(&self, payload: &DocumentPayload, path: &Path) -> Result<PathBuf> {
        self.record(PlatformCall::Save {
            path: path.to_path_buf(),
            bytes: payload.len(),
        });
        Ok(path.to_path_buf())
    }

    fn print(&self, path: &Path) -> Result<()> {
        self.record(PlatformCall::Print(path.to_path_buf()));
        match &self.fail_print {
            Some(reason) => bail!("{reason}"),
            None => Ok(()),
        }
    }

    fn view(&self, path: &Path) -> Result<()> {
        self.record(PlatformCall::View(path.to_path_buf()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> DocumentPayload {
        DocumentPayload::new(b"%PDF-1.4 test".to_vec(), None, None)
    }

    #[test]
    fn system_save_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/doc.pdf");
        let written = SystemPlatform::default().save(&pdf(), &path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4 test");
    }

    #[cfg(unix)]
    #[test]
    fn system_print_runs_command_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fs::write(&path, b"x").unwrap();
        let ok = SystemPlatform {
            print_command: "true".into(),
            view_command: "true".into(),
        };
        ok.print(&path).unwrap();
        ok.view(&path).unwrap();

        let failing = SystemPlatform {
            print_command: "false".into(),
            view_command: "drivedoc-no-such-viewer".into(),
        };
        assert!(failing.print(&path).is_err());
        assert!(failing.view(&path).is_err());
    }

    #[test]
    fn empty_command_is_error() {
        assert!(run_with_path("   ", Path::new("x.pdf")).is_err());
    }

    #[test]
    fn recording_platform_records() {
        let p = RecordingPlatform::failing_print("no printer");
        p.save(&pdf(), Path::new("/spool/doc.pdf")).unwrap();
        assert!(p.print(Path::new("/spool/doc.pdf")).is_err());
        p.view(Path::new("/spool/doc.pdf")).unwrap();
        assert_eq!(
            p.calls(),
            vec![
                PlatformCall::Save {
                    path: "/spool/doc.pdf".into(),
                    bytes: 13
                },
                PlatformCall::Print("/spool/doc.pdf".into()),
                PlatformCall::View("/spool/doc.pdf".into()),
            ]
        );
    }
}
