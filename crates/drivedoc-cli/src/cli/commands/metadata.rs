//! `drivedoc metadata <input>` – show what the proxy knows about a document.

use anyhow::Result;
use drivedoc_core::MetadataRecord;

pub async fn run_metadata(session: &super::Session, input: &str, json: bool) -> Result<()> {
    let record = session
        .timed("metadata", async {
            session.client.fetch_metadata(input).await.map_err(anyhow::Error::from)
        })
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

fn print_record(m: &MetadataRecord) {
    let rows = [
        ("id", m.id.clone()),
        ("name", m.name.clone()),
        ("mime_type", m.mime_type.clone()),
        ("size", m.size.map(|s| s.to_string())),
        ("created", m.created_time.clone()),
        ("modified", m.modified_time.clone()),
        ("owner", m.owner.clone()),
        ("view_url", m.view_url.clone()),
        ("download_url", m.download_url.clone()),
        ("proxy_url", m.proxy_url.clone()),
    ];
    for (label, value) in rows {
        if let Some(v) = value {
            println!("{:<14} {}", label, v);
        }
    }
    if let Some(err) = &m.error {
        println!("{:<14} {} (links only)", "warning", err);
    }
}
