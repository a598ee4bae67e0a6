//! `drivedoc email <input> <recipient>` – have the proxy email a document.

use anyhow::Result;
use drivedoc_core::EmailRequest;

pub async fn run_email(
    session: &super::Session,
    input: &str,
    recipient: String,
    document_type: Option<String>,
    document_name: Option<String>,
) -> Result<()> {
    let req = EmailRequest {
        recipient,
        document_type: document_type.or_else(|| Some(session.cfg.default_document_type.clone())),
        document_name: document_name.or_else(|| Some(session.cfg.default_document_name.clone())),
    };

    let ack = session
        .timed("email", async {
            session
                .client
                .send_by_email(input, &req)
                .await
                .map_err(anyhow::Error::from)
        })
        .await?;
    match ack.message {
        Some(msg) => println!("{msg}"),
        None => println!("Sent to {}", req.recipient),
    }
    Ok(())
}
