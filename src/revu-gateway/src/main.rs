//! Revu Gateway - HTTP server binary.

use std::process::ExitCode;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use revu_gateway::{GatewayConfig, run_with_shutdown};

/// Revu API gateway
#[derive(Parser)]
#[command(name = "revu-server")]
#[command(about = "HTTP gateway relaying code reviews to an AI provider")]
#[command(version)]
struct Args {
    /// Listen address (overrides PORT / REVU_LISTEN_ADDR)
    #[arg(short, long)]
    listen: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,
}

fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Environment file is optional; real environment always wins.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    setup_logging(&args.log_level, args.json_logs);

    let mut config = GatewayConfig::from_env();
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    info!("Starting Revu gateway on {}", config.listen_addr);
    info!("Press Ctrl+C to stop");

    let shutdown = async {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received Ctrl+C, shutting down...");
            }
            _ = terminate => {
                info!("Received SIGTERM, shutting down...");
            }
        }
    };

    if let Err(e) = run_with_shutdown(config, shutdown).await {
        error!("Gateway error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
