pub mod mock_gateway;

use crate::config::{GatewaySettings, Settings, WorkflowSettings};

/// Settings pointed at `base_url` with all pacing collapsed so workflow
/// tests finish in milliseconds.
pub fn fast_settings(base_url: &str) -> Settings {
    Settings {
        gateway: GatewaySettings {
            base_url: base_url.to_string(),
            request_timeout_ms: 1000,
        },
        workflow: WorkflowSettings {
            poll_iterations: 3,
            poll_delay_ms: 10,
            start_settle_ms: 10,
            stop_settle_ms: 10,
        },
    }
}
