//! Configuration for the TelemetryHub client.

use std::time::Duration;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use crate::poll::PollSchedule;

/// Main configuration structure for the client.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub workflow: WorkflowSettings,
}

/// Where the gateway lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    /// Base URL of the gateway REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds, connect time included.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl GatewaySettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Pacing of the measurement workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowSettings {
    /// Number of status polls in the sampling phase.
    #[serde(default = "default_poll_iterations")]
    pub poll_iterations: u32,
    /// Pause between consecutive polls, in milliseconds.
    #[serde(default = "default_poll_delay_ms")]
    pub poll_delay_ms: u64,
    /// Settle pause after start, before the state is read back.
    #[serde(default = "default_start_settle_ms")]
    pub start_settle_ms: u64,
    /// Settle pause after stop, before the final status fetch.
    #[serde(default = "default_stop_settle_ms")]
    pub stop_settle_ms: u64,
}

impl WorkflowSettings {
    pub fn poll_schedule(&self) -> PollSchedule {
        PollSchedule {
            iterations: self.poll_iterations,
            delay: Duration::from_millis(self.poll_delay_ms),
        }
    }

    pub fn start_settle(&self) -> Duration {
        Duration::from_millis(self.start_settle_ms)
    }

    pub fn stop_settle(&self) -> Duration {
        Duration::from_millis(self.stop_settle_ms)
    }
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            poll_iterations: default_poll_iterations(),
            poll_delay_ms: default_poll_delay_ms(),
            start_settle_ms: default_start_settle_ms(),
            stop_settle_ms: default_stop_settle_ms(),
        }
    }
}

// Default values
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_request_timeout_ms() -> u64 {
    5000
}
fn default_poll_iterations() -> u32 {
    10
}
fn default_poll_delay_ms() -> u64 {
    500
}
fn default_start_settle_ms() -> u64 {
    500
}
fn default_stop_settle_ms() -> u64 {
    200
}

impl Settings {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (TELEMETRY__SECTION__KEY format)
    /// 2. config.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = ConfigLoader::builder()
            // Load from config.toml if exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables (TELEMETRY__SECTION__KEY format)
            .add_source(
                Environment::with_prefix("TELEMETRY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.gateway.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Message(format!(
                "gateway.base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        Ok(())
    }
}
