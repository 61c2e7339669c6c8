use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use billed_api_client::ApiClient;
use billed_app::{
    BillSubmissionService, BillsListService, FileChangeOutcome, Navigator, SelectedFile,
    StaticSession, SubmitOutcome,
};
use billed_core::models::{BillForm, SessionIdentity};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "billed")]
#[command(about = "Submit and list expense bills")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a new bill with a receipt file
    Submit {
        /// Path to the receipt file (jpg, jpeg, or png)
        #[arg(long)]
        receipt: PathBuf,

        /// Expense type, e.g. Transports
        #[arg(long = "type")]
        expense_type: String,

        /// Expense name
        #[arg(long)]
        name: String,

        /// Amount (raw form value)
        #[arg(long)]
        amount: String,

        /// ISO date, e.g. 2023-09-07
        #[arg(long)]
        date: String,

        /// VAT
        #[arg(long)]
        vat: String,

        /// Percentage (raw form value)
        #[arg(long)]
        pct: String,

        /// Optional commentary
        #[arg(long, default_value = "")]
        commentary: String,
    },
    /// List previously submitted bills
    List,
}

/// CLI stand-in for the view router: a navigation is a log line.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        info!(path, "navigating");
    }
}

fn session_from_env() -> Result<SessionIdentity> {
    let email = std::env::var("BILLED_EMAIL")
        .context("Missing session identity. Set BILLED_EMAIL to the employee email")?;
    Ok(SessionIdentity::employee(email))
}

fn content_type_for(path: &PathBuf) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = Arc::new(ApiClient::from_env()?);

    match cli.command {
        Command::Submit {
            receipt,
            expense_type,
            name,
            amount,
            date,
            vat,
            pct,
            commentary,
        } => {
            let session = StaticSession(session_from_env()?);
            let mut service =
                BillSubmissionService::new(client, Arc::new(LogNavigator), &session);

            let file_name = receipt
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string())
                .context("Receipt path has no file name")?;
            let content = std::fs::read(&receipt)
                .with_context(|| format!("Failed to read receipt: {}", receipt.display()))?;

            let selected = SelectedFile {
                content_type: content_type_for(&receipt).to_string(),
                name: file_name,
                content,
            };

            match service.handle_file_change(&[selected]).await {
                FileChangeOutcome::Uploaded => {}
                FileChangeOutcome::Rejected => {
                    bail!("Receipt rejected: only jpg, jpeg, and png files are accepted")
                }
                FileChangeOutcome::UploadFailed => bail!("Receipt upload failed"),
                FileChangeOutcome::NoFile => unreachable!("a file was provided"),
            }

            let form = BillForm {
                expense_type,
                expense_name: name,
                amount,
                date,
                vat,
                pct,
                commentary,
            };

            match service.handle_submit(&form).await {
                SubmitOutcome::Submitted => println!("Bill submitted"),
                SubmitOutcome::Failed => bail!("Bill submission failed"),
            }
        }
        Command::List => {
            let service = BillsListService::new(client);
            let view = service.fetch().await;
            print!("{}", view.render());
        }
    }

    Ok(())
}
