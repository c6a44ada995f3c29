//! Canned gateway response bodies for tests.

use serde_json::json;

pub fn idle_status() -> serde_json::Value {
    json!({
        "state": "IDLE",
        "sample": null
    })
}

pub fn running_status(sequence_id: u64, value: f64) -> serde_json::Value {
    json!({
        "state": "RUNNING",
        "sample": {
            "sequence_id": sequence_id,
            "value": value,
            "unit": "V",
            "timestamp": "2024-01-01T00:00:00Z"
        }
    })
}

/// A RUNNING status where the device has not produced a reading yet.
pub fn running_status_without_sample() -> serde_json::Value {
    json!({
        "state": "RUNNING"
    })
}

pub fn command_ack(status: &str) -> serde_json::Value {
    json!({
        "status": status
    })
}

/// The minimal acknowledgement some gateway builds send.
pub fn empty_ack() -> serde_json::Value {
    json!({})
}

/// A status body whose state is not a string. Decoding must fail.
pub fn malformed_status() -> serde_json::Value {
    json!({
        "state": 7
    })
}

/// A status body carrying a field this client does not know. Strict
/// decoding must reject it.
pub fn status_with_unknown_field() -> serde_json::Value {
    json!({
        "state": "IDLE",
        "sample": null,
        "uptime_seconds": 12
    })
}
