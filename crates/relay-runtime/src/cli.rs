//! # Command Line
//!
//! Access to both engines. Each command prints JSON to stdout; a rejected
//! envelope exits non-zero. `verify` reaches the network for the signing
//! certificate and, for a verified subscription, the `SubscribeURL`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sr_01_sns_verification::{CertificateFetcher, MessageType, SubscriptionConfirmer};

use crate::container::RelayContainer;
use crate::handlers::SnsOutcome;

/// relay: SNS signature verification and rkhunter report summaries
#[derive(Parser, Debug)]
#[command(name = "relay")]
#[command(about = "Verify SNS envelopes and summarise rkhunter reports as webhook payloads")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Verify an SNS envelope and print the webhook payload for it, confirming
    /// the subscription when it is a SubscriptionConfirmation
    Verify {
        /// Envelope JSON file, or `-` for stdin
        input: PathBuf,
    },
    /// Summarise an rkhunter log as a webhook payload
    Report {
        /// rkhunter log file, or `-` for stdin
        file: PathBuf,

        /// Server the report came from
        #[arg(short, long)]
        server: Option<String>,
    },
    /// Print the fields extracted from an rkhunter log
    Fields {
        /// rkhunter log file, or `-` for stdin
        file: PathBuf,
    },
    /// Print the relay metrics in Prometheus text format
    Metrics,
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Execute one command against `container`, writing its output to `out`.
pub async fn run<F, C, W>(
    command: Command,
    container: &RelayContainer<F, C>,
    out: &mut W,
) -> Result<()>
where
    F: CertificateFetcher,
    C: SubscriptionConfirmer,
    W: Write,
{
    match command {
        Command::Verify { input } => {
            let body = read_input(&input)?;
            match container.sns_handler().handle(&body).await? {
                SnsOutcome::Notification(payload) => {
                    writeln!(out, "{}", payload.to_json()?)?;
                }
                SnsOutcome::Subscribed {
                    topic_arn,
                    subscribe_url,
                } => {
                    let confirmation = serde_json::json!({
                        "type": MessageType::SubscriptionConfirmation.as_str(),
                        "topicArn": topic_arn,
                        "subscribeUrl": subscribe_url,
                        "confirmed": true,
                    });
                    writeln!(out, "{confirmation}")?;
                }
                SnsOutcome::Unsubscribed { topic_arn } => {
                    let confirmation = serde_json::json!({
                        "type": MessageType::UnsubscribeConfirmation.as_str(),
                        "topicArn": topic_arn,
                    });
                    writeln!(out, "{confirmation}")?;
                }
            }
        }
        Command::Report { file, server } => {
            let text = read_input(&file)?;
            let payload = container
                .scan_report_handler()
                .report(server.as_deref(), &text);
            writeln!(out, "{}", payload.to_json()?)?;
        }
        Command::Fields { file } => {
            let text = read_input(&file)?;
            let fields = container.scan_report_handler().fields(&text);
            writeln!(out, "{}", serde_json::to_string_pretty(&fields)?)?;
        }
        Command::Metrics => {
            write!(out, "{}", relay_telemetry::encode_metrics()?)?;
        }
    }
    Ok(())
}
