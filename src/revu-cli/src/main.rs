//! Revu CLI - submit code for review from the terminal.
//!
//! Reads code from a file (or stdin), drives one review session against
//! a running gateway, and prints the markdown review.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use revu_session::{HttpTransport, ReviewSession, SessionPhase, SubmitOutcome};
use tracing_subscriber::EnvFilter;

/// Revu code reviewer
#[derive(Parser)]
#[command(name = "revu")]
#[command(about = "Submit code to the Revu gateway for AI review")]
#[command(version)]
struct Args {
    /// File to review; reads stdin when omitted
    file: Option<PathBuf>,

    /// Gateway base URL
    #[arg(long, env = "REVU_GATEWAY_URL", default_value = revu_session::DEFAULT_GATEWAY_URL)]
    gateway: String,

    /// Request deadline in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn read_code(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("failed to read stdin")?;
            Ok(code)
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let code = read_code(args.file.as_deref())?;
    anyhow::ensure!(!code.trim().is_empty(), "nothing to review: input is empty");

    let transport = Arc::new(HttpTransport::with_timeout(
        Some(args.gateway),
        Duration::from_secs(args.timeout),
    ));
    let session = ReviewSession::new(transport);

    match session.submit(code) {
        SubmitOutcome::Accepted => {}
        SubmitOutcome::Busy => anyhow::bail!("a review is already in flight"),
    }

    let settled = session.settled().await;
    match settled.phase {
        SessionPhase::Succeeded => {
            println!("{}", settled.review.unwrap_or_default());
            Ok(())
        }
        SessionPhase::Failed => {
            anyhow::bail!(settled.error.unwrap_or_else(|| "review failed".to_string()))
        }
        SessionPhase::Idle | SessionPhase::Requesting => {
            anyhow::bail!("session ended before the review resolved")
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
