//! `drivedoc print <input>` – download into a spool dir and print.

use anyhow::{Context, Result};
use drivedoc_core::actions::{DocumentActions, PrintOutcome};
use drivedoc_core::platform::SystemPlatform;

pub async fn run_print(session: &super::Session, input: &str) -> Result<()> {
    let spool = std::env::temp_dir().join("drivedoc-print");
    std::fs::create_dir_all(&spool).with_context(|| format!("create {}", spool.display()))?;
    let actions = DocumentActions::new(
        session.client.clone(),
        SystemPlatform::from_config(&session.cfg),
    );

    match session.timed("print", actions.print(input, &spool)).await? {
        PrintOutcome::Printed(saved) => {
            println!("Sent {} to the printer", saved.path.display());
        }
        PrintOutcome::SavedInstead { saved, reason } => {
            eprintln!("Printing failed: {reason}");
            println!("Document saved to {}", saved.path.display());
        }
    }
    Ok(())
}
