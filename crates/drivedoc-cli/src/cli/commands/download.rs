//! `drivedoc download <input>` – save a document locally.

use anyhow::Result;
use drivedoc_core::actions::DocumentActions;
use drivedoc_core::platform::SystemPlatform;
use std::path::Path;

pub async fn run_download(
    session: &super::Session,
    input: &str,
    output: Option<&Path>,
    sha256: bool,
) -> Result<()> {
    let target = match output {
        Some(p) => p.to_path_buf(),
        None => session.download_dir()?,
    };
    let actions = DocumentActions::new(
        session.client.clone(),
        SystemPlatform::from_config(&session.cfg),
    );

    let saved = session
        .timed("download", actions.download_to(input, &target))
        .await?;
    println!(
        "Saved {} ({} bytes, {})",
        saved.path.display(),
        saved.bytes,
        saved.content_type
    );
    if sha256 {
        println!("{}  {}", saved.sha256, saved.path.display());
    }
    Ok(())
}
