//! `drivedoc view <input>` – download and open in the desktop viewer.

use anyhow::Result;
use drivedoc_core::actions::DocumentActions;
use drivedoc_core::platform::SystemPlatform;

pub async fn run_view(session: &super::Session, input: &str) -> Result<()> {
    let dir = session.download_dir()?;
    let actions = DocumentActions::new(
        session.client.clone(),
        SystemPlatform::from_config(&session.cfg),
    );
    let saved = session.timed("view", actions.view(input, &dir)).await?;
    println!("Opened {}", saved.path.display());
    Ok(())
}
