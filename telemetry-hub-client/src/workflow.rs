//! The fixed measurement workflow.

use tokio::time::sleep;

use crate::client::GatewayClient;
use crate::config::WorkflowSettings;
use crate::error::Result;
use crate::{poll, render};

/// Drive one measurement run from initial status to final status.
///
/// Steps, in order: show the initial status, start the measurement,
/// settle and read the state back, poll for samples, stop the
/// measurement, settle and show the final status. The first failing
/// step aborts the rest; the caller decides what the failure means.
///
/// The state read back after start is displayed but not enforced. The
/// gateway owns the transition to RUNNING and may still be mid-switch
/// when the settle pause ends, so a non-RUNNING state here only logs a
/// warning and polling proceeds.
pub async fn run(client: &GatewayClient, settings: &WorkflowSettings) -> Result<()> {
    println!("{}", render::SEPARATOR);
    println!("TelemetryHub REST Client");
    println!("{}", render::SEPARATOR);

    println!("\n[1] Getting initial status...");
    let status = client.status().await?;
    println!("    Device state: {}", status.state);
    println!("{}", render::sample_line(status.sample.as_ref()));

    println!("\n[2] Starting measurement...");
    let result = client.start().await?;
    println!("    Command result: {}", result.status_or("started"));
    sleep(settings.start_settle()).await;

    let status = client.status().await?;
    println!("    New state: {}", status.state);
    if !status.state.is_running() {
        tracing::warn!(
            "Device state is {} after start, polling anyway",
            status.state
        );
    }

    println!(
        "\n[3] Polling for {} samples (press Ctrl+C to stop)...",
        settings.poll_iterations
    );
    poll::run(client, settings.poll_schedule()).await?;

    println!("\n[4] Stopping measurement...");
    let result = client.stop().await?;
    println!("    Command result: {}", result.status_or("stopped"));
    sleep(settings.stop_settle()).await;

    let status = client.status().await?;
    println!("    Final state: {}", status.state);
    println!("{}", render::sample_line(status.sample.as_ref()));

    println!("\n{}", render::SEPARATOR);
    println!("✓ Workflow completed successfully");
    println!("{}", render::SEPARATOR);

    Ok(())
}
