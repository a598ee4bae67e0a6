//! `drivedoc resolve <input>` – show the file ID and Drive links.

use anyhow::Result;
use drivedoc_core::FileId;

pub fn run_resolve(input: &str) -> Result<()> {
    let id = FileId::parse(input)?;
    println!("{:<14} {}", "file_id", id);
    println!("{:<14} {}", "view_url", id.view_url());
    println!("{:<14} {}", "download_url", id.public_download_url());
    Ok(())
}
