//! Outcome classification and terminal reporting.

use std::future::Future;

use crate::client::GatewayClient;
use crate::config::Settings;
use crate::error::Error;
use crate::{render, workflow};

/// Terminal outcome of a client run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The workflow ran to completion.
    Completed,
    /// The operator interrupted the run and cleanup was attempted.
    Cancelled,
    /// The workflow failed and the failure was reported.
    Failed,
}

impl Termination {
    /// Process exit code. Completion and graceful cancellation are clean
    /// exits; every failure is 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Termination::Completed | Termination::Cancelled => 0,
            Termination::Failed => 1,
        }
    }
}

/// Outcome of the best-effort stop issued on cancellation.
///
/// Both variants lead to the same clean exit. They are distinguished so
/// logs and tests can tell a stop that landed from one that was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// The gateway acknowledged the stop.
    Stopped,
    /// The stop attempt itself failed; the failure is logged, not
    /// surfaced.
    Ignored(String),
}

/// Run the full workflow and fold every outcome into a [`Termination`].
///
/// `shutdown` is the cancellation signal (Ctrl+C in production, any
/// future in tests). It preempts the workflow at whichever await point
/// is pending: the in-flight request or pause is dropped, the remaining
/// steps are skipped, and the best-effort stop path runs instead.
pub async fn run_with_shutdown<F>(settings: &Settings, shutdown: F) -> Termination
where
    F: Future<Output = ()>,
{
    let client = match GatewayClient::new(
        &settings.gateway.base_url,
        settings.gateway.request_timeout(),
    ) {
        Ok(client) => client,
        Err(e) => {
            print_failure(&e, &settings.gateway.base_url);
            return Termination::Failed;
        }
    };

    let outcome = tokio::select! {
        result = workflow::run(&client, &settings.workflow) => result,
        _ = shutdown => Err(Error::Cancelled),
    };

    match outcome {
        Ok(()) => Termination::Completed,
        Err(Error::Cancelled) => {
            println!("\n\nInterrupted by user. Stopping measurement...");
            best_effort_stop(&client).await;
            Termination::Cancelled
        }
        Err(e) => {
            print_failure(&e, client.base_url());
            Termination::Failed
        }
    }
}

/// Issue one stop so the device is not left measuring.
///
/// Called after a cancellation, where a secondary failure must not turn
/// the clean exit into a failed one. The attempt's outcome is still
/// reported to the caller and the log.
pub async fn best_effort_stop(client: &GatewayClient) -> CleanupOutcome {
    match client.stop().await {
        Ok(result) => {
            tracing::info!("Stop acknowledged: {}", result.status_or("stopped"));
            CleanupOutcome::Stopped
        }
        Err(e) => {
            tracing::warn!("Ignoring stop failure during cancellation: {}", e);
            CleanupOutcome::Ignored(e.to_string())
        }
    }
}

/// The terminal failure report for `error`, as printed.
///
/// Connectivity failures get operator guidance naming the configured
/// gateway address; every other kind reports its classification and
/// message.
pub fn failure_report(error: &Error, gateway_url: &str) -> String {
    match error {
        Error::Connectivity(detail) => [
            String::new(),
            render::SEPARATOR.to_string(),
            format!("ERROR: Cannot connect to gateway at {}", gateway_url),
            format!("       {}", detail),
            String::new(),
            "Make sure the gateway is running, or point this client at it:".to_string(),
            "  config file:  [gateway] base_url in config.toml".to_string(),
            "  environment:  TELEMETRY__GATEWAY__BASE_URL".to_string(),
            render::SEPARATOR.to_string(),
        ]
        .join("\n"),
        other => format!("\nERROR [{}]: {}", other.kind(), other),
    }
}

fn print_failure(error: &Error, gateway_url: &str) {
    eprintln!("{}", failure_report(error, gateway_url));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Termination::Completed.exit_code(), 0);
        assert_eq!(Termination::Cancelled.exit_code(), 0);
        assert_eq!(Termination::Failed.exit_code(), 1);
    }

    #[test]
    fn test_cleanup_outcomes_are_distinguishable() {
        assert_ne!(
            CleanupOutcome::Stopped,
            CleanupOutcome::Ignored("connection refused".to_string())
        );
    }

    #[test]
    fn test_connectivity_report_carries_guidance() {
        let error = Error::Connectivity("connection refused".to_string());
        let report = failure_report(&error, "http://localhost:8080");

        assert!(report.contains("Cannot connect to gateway at http://localhost:8080"));
        assert!(report.contains("connection refused"));
        assert!(report.contains("Make sure the gateway is running"));
    }

    #[test]
    fn test_other_failures_report_kind_and_message() {
        let error = Error::Protocol("/status returned 500".to_string());
        let report = failure_report(&error, "http://localhost:8080");

        assert!(report.contains("ERROR [protocol]"));
        assert!(report.contains("/status returned 500"));
        assert!(!report.contains("Make sure the gateway is running"));
    }
}
