//! CLI for the drivedoc proxy client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use drivedoc_core::config;
use std::path::PathBuf;

use commands::{
    run_completions, run_download, run_email, run_man, run_metadata, run_print, run_resolve,
    run_view, Session,
};

/// Top-level CLI for drivedoc.
#[derive(Debug, Parser)]
#[command(name = "drivedoc")]
#[command(about = "Download, inspect, print and email Google Drive documents through the backend proxy", long_about = None)]
pub struct Cli {
    /// Proxy base address; overrides the config file and DRIVEDOC_BASE_URL.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract the file ID from a Drive URL (no network access).
    Resolve {
        /// Drive file ID or URL.
        input: String,
    },

    /// Download a document through the proxy.
    Download {
        /// Drive file ID or URL.
        input: String,
        /// Output file or directory (default: configured download_dir, else current directory).
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Print the SHA-256 of the saved file.
        #[arg(long)]
        sha256: bool,
    },

    /// Show document metadata.
    Metadata {
        /// Drive file ID or URL.
        input: String,
        /// Print the raw record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Ask the proxy to email the document.
    Email {
        /// Drive file ID or URL.
        input: String,
        /// Recipient address.
        recipient: String,
        /// Document type label (default from config, "Document").
        #[arg(long, value_name = "TYPE")]
        document_type: Option<String>,
        /// Document name label (default from config, "document").
        #[arg(long, value_name = "NAME")]
        document_name: Option<String>,
    },

    /// Download a document and send it to the printer.
    Print {
        /// Drive file ID or URL.
        input: String,
    },

    /// Download a document and open it in the desktop viewer.
    View {
        /// Drive file ID or URL.
        input: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            CliCommand::Resolve { input } => return run_resolve(input),
            _ => {}
        }

        let mut cfg = config::load_or_init()?;
        cfg.apply_env();
        if let Some(url) = cli.base_url {
            cfg.base_url = url;
        }
        tracing::debug!("loaded config: {:?}", cfg);
        let session = Session::new(cfg)?;

        match cli.command {
            CliCommand::Download {
                input,
                output,
                sha256,
            } => run_download(&session, &input, output.as_deref(), sha256).await?,
            CliCommand::Metadata { input, json } => run_metadata(&session, &input, json).await?,
            CliCommand::Email {
                input,
                recipient,
                document_type,
                document_name,
            } => run_email(&session, &input, recipient, document_type, document_name).await?,
            CliCommand::Print { input } => run_print(&session, &input).await?,
            CliCommand::View { input } => run_view(&session, &input).await?,
            CliCommand::Resolve { .. } | CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
