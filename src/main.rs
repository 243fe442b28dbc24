//! Dobill - DigitalOcean cost summary chat command
//!
//! CLI entry point for one command invocation: prints the chat reply the
//! command would post, either as plain text or as the raw reply envelope.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use dobill_command::{BillCommand, EnvSecrets};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compute a DigitalOcean cost summary and print the chat reply
#[derive(Parser)]
#[command(name = "dobill", version, about)]
struct Cli {
    /// Print the raw slash-command JSON envelope instead of plain text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dobill=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!("Running dobill v{}", env!("CARGO_PKG_VERSION"));

    let command = BillCommand::new(EnvSecrets);
    let response = command.execute().await;

    if cli.json {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", response.text);
    }

    Ok(())
}
