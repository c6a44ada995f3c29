//! TelemetryHub client - drives a measurement run on a remote acquisition
//! gateway over its REST API.

use std::env;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use telemetry_hub_client::config::Settings;
use telemetry_hub_client::report;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    println!("telemetry-client {}", VERSION);
}

#[tokio::main]
async fn main() -> ExitCode {
    // Handle --version / -V
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        print_version();
        return ExitCode::SUCCESS;
    }

    // Initialize tracing. Stdout belongs to the workflow output, so log
    // lines go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::from(1);
        }
    };
    tracing::info!("Gateway base URL: {}", settings.gateway.base_url);

    let termination = report::run_with_shutdown(&settings, shutdown_signal()).await;
    ExitCode::from(termination.exit_code())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        // Resolving here would read as a cancellation; park this branch
        // instead so the workflow keeps running, just uninterruptible.
        std::future::pending::<()>().await;
    }
}
