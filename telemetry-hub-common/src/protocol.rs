//! Wire types for the gateway REST protocol.
//!
//! This module defines the response shapes exchanged between the gateway
//! and its clients.
//!
//! # Protocol Overview
//!
//! The gateway exposes three JSON-over-HTTP endpoints:
//!
//! | Method | Path      | Response                         |
//! |--------|-----------|----------------------------------|
//! | GET    | `/status` | [`GatewayStatus`]                |
//! | POST   | `/start`  | [`CommandResult`]                |
//! | POST   | `/stop`   | [`CommandResult`]                |
//!
//! None of the requests carry a body. The gateway owns the measurement
//! state machine; clients only observe it through `/status`, so a status
//! without a sample and a state string a client has never seen are both
//! valid responses, not errors.
//!
//! Decoding is strict: unknown fields are rejected so that schema drift on
//! the gateway side surfaces as a protocol error instead of silently
//! dropped data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Measurement state reported by the gateway.
///
/// The known states cover the device lifecycle; anything else the gateway
/// reports (transitional or future states) is preserved verbatim in
/// [`DeviceState::Other`] rather than failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceState {
    /// No measurement in progress.
    Idle,
    /// Measurement running, samples being produced.
    Running,
    /// Device fault reported by the gateway.
    Error,
    /// Device parked in its safe state after repeated failures.
    SafeState,
    /// Any state string this client does not know about.
    Other(String),
}

impl DeviceState {
    /// The wire literal for this state.
    pub fn as_str(&self) -> &str {
        match self {
            DeviceState::Idle => "IDLE",
            DeviceState::Running => "RUNNING",
            DeviceState::Error => "ERROR",
            DeviceState::SafeState => "SAFE_STATE",
            DeviceState::Other(state) => state,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, DeviceState::Running)
    }
}

impl From<String> for DeviceState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "IDLE" => DeviceState::Idle,
            "RUNNING" => DeviceState::Running,
            "ERROR" => DeviceState::Error,
            "SAFE_STATE" => DeviceState::SafeState,
            _ => DeviceState::Other(value),
        }
    }
}

impl From<DeviceState> for String {
    fn from(state: DeviceState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One telemetry reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sample {
    /// Position of this reading in the measurement run. Non-decreasing
    /// while the device is RUNNING.
    pub sequence_id: u64,
    /// Measured value.
    pub value: f64,
    /// Unit the value is expressed in (e.g. "V").
    pub unit: String,
    /// Acquisition time as reported by the gateway. May be absent.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl fmt::Display for Sample {
    /// Fixed-width reading line: sequence id, value to three decimals,
    /// unit, timestamp (or `N/A` when the gateway reported none).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sample #{:<6} Value: {:>8.3} {:<12} Time: {}",
            self.sequence_id,
            self.value,
            self.unit,
            self.timestamp.as_deref().unwrap_or("N/A"),
        )
    }
}

/// Response body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayStatus {
    /// Current device state.
    pub state: DeviceState,
    /// Most recent reading, present only while a measurement is active or
    /// a final reading is still cached. Absence is expected, not an error.
    #[serde(default)]
    pub sample: Option<Sample>,
}

/// Response body of `POST /start` and `POST /stop`.
///
/// The status literal is informational; callers display it (with a
/// fallback) and never branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandResult {
    /// Acknowledgement literal from the gateway, if it sent one.
    #[serde(default)]
    pub status: Option<String>,
}

impl CommandResult {
    /// The reported status literal, or `fallback` when the gateway sent
    /// an empty body.
    pub fn status_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.status.as_deref().unwrap_or(fallback)
    }
}
